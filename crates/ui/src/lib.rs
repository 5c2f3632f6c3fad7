pub mod card;
pub mod config;
pub mod skeleton;
pub mod tabs;

pub use card::{
    ActionsProp, Card, CardSize, CardSlotClasses, CardSlotStyles, CardTab, CardTabProps,
    TabBarExtra,
};
pub use config::{use_ui_config, ConfigProvider, UiConfig, Variant};
pub use skeleton::Skeleton;
pub use tabs::{TabItem, TabSize, TabStrip};
