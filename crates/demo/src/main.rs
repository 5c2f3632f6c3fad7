use leptos::html::Div;
use leptos::prelude::*;
use ui::{ActionsProp, Card, CardTab, CardTabProps, ConfigProvider, TabBarExtra, TabSize};

fn main() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    view! {
        <div class="demo">
            <h1>"Card showcase"</h1>
            <BasicSection />
            <LoadingSection />
            <TabsSection />
            <ControlledTabsSection />
            <AmbientVariantSection />
            <ActionsSection />
        </div>
    }
}

#[component]
fn BasicSection() -> impl IntoView {
    let card_ref: NodeRef<Div> = NodeRef::new();
    Effect::new(move |_| {
        if let Some(el) = card_ref.get() {
            log::debug!("card root class: {}", el.class_name());
        }
    });

    view! {
        <section>
            <h2>"Title and extra"</h2>
            <Card
                title={view! { <span>"Card title"</span> }.into_any()}
                extra={view! { <a href="#">"More"</a> }.into_any()}
                style="width: 300px;"
                node_ref=card_ref
            >
                <p>"Card content"</p>
            </Card>
            <Card size="small" title={view! { <span>"Small card"</span> }.into_any()}>
                <p>"Compact paddings"</p>
            </Card>
        </section>
    }
}

#[component]
fn LoadingSection() -> impl IntoView {
    let loading = RwSignal::new(true);

    view! {
        <section>
            <h2>"Loading"</h2>
            <button on:click=move |_| loading.update(|l| *l = !*l)>"Toggle loading"</button>
            // The zeroed body padding applies only once loading is off.
            <Card loading=loading body_style="padding: 0;">
                <p>"Loaded content"</p>
            </Card>
        </section>
    }
}

#[component]
fn TabsSection() -> impl IntoView {
    let tab_list = vec![
        CardTab::new("tab1", || "tab1"),
        CardTab::new("tab2", || "tab2"),
        CardTab {
            key: "disabled".to_string(),
            label: Some(ViewFn::from(|| "disabled")),
            disabled: true,
            ..Default::default()
        },
    ];
    let bar_extra = TabBarExtra::split(
        Some(ViewFn::from(|| view! { <span>"Left"</span> })),
        Some(ViewFn::from(|| view! { <span>"Right"</span> })),
    );
    let editable_props = CardTabProps {
        size: Some(TabSize::Small),
        editable: true,
        on_add: Some(Callback::new(|_| log::info!("add tab requested"))),
    };

    view! {
        <section>
            <h2>"Tabs (uncontrolled)"</h2>
            <Card
                title={view! { <span>"Tabbed card"</span> }.into_any()}
                tab_list=tab_list
                tab_bar_extra=bar_extra
                on_tab_change=Callback::new(|key: String| log::info!("tab changed: {key}"))
            >
                <p>"Content under the active tab"</p>
            </Card>
            <h2>"Editable tab strip, empty list"</h2>
            <Card
                title={view! { <span>"No tabs yet"</span> }.into_any()}
                tab_list={Vec::<CardTab>::new()}
                tab_props=editable_props
            >
                <p>"The add affordance is still there"</p>
            </Card>
        </section>
    }
}

#[component]
fn ControlledTabsSection() -> impl IntoView {
    let active = RwSignal::new("tab1".to_string());
    let tab_list = vec![
        CardTab::new("tab1", || "tab1"),
        CardTab::new("tab2", || "tab2"),
    ];

    view! {
        <section>
            <h2>"Tabs (controlled)"</h2>
            <button on:click=move |_| active.set("tab1".to_string())>"Activate tab1"</button>
            <button on:click=move |_| active.set("tab2".to_string())>"Activate tab2"</button>
            <Card
                tab_list=tab_list
                active_tab_key=Signal::derive(move || active.get())
                on_tab_change=Callback::new(move |key: String| active.set(key))
            >
                <p>{move || format!("Active: {}", active.get())}</p>
            </Card>
        </section>
    }
}

#[component]
fn AmbientVariantSection() -> impl IntoView {
    let ambient = RwSignal::new("outlined".to_string());
    let local = RwSignal::new(None::<String>);

    view! {
        <section>
            <h2>"Ambient variant"</h2>
            <button on:click=move |_| ambient.set("borderless".to_string())>
                "Set ambient borderless"
            </button>
            <button on:click=move |_| local.set(Some("outlined".to_string()))>
                "Set local outlined"
            </button>
            <ConfigProvider variant=Signal::derive(move || ambient.get())>
                <Card
                    title={view! { <span>"Inheriting card"</span> }.into_any()}
                    variant=Signal::derive(move || local.get())
                >
                    <p>"Border follows the provider until a local variant is set"</p>
                </Card>
            </ConfigProvider>
        </section>
    }
}

#[component]
fn ActionsSection() -> impl IntoView {
    view! {
        <section>
            <h2>"Actions"</h2>
            <Card title={view! { <span>"With actions"</span> }.into_any()}
                actions=vec![
                    view! { <a href="#">"Edit"</a> }.into_any(),
                    view! { <a href="#">"Share"</a> }.into_any(),
                    view! { <a href="#">"Delete"</a> }.into_any(),
                ]
            >
                <p>"Card content"</p>
            </Card>
            <h2>"Actions of the wrong type render nothing"</h2>
            <Card title={view! { <span>"No action bar"</span> }.into_any()} actions=ActionsProp::from(11)>
                <p>"Card content"</p>
            </Card>
        </section>
    }
}
