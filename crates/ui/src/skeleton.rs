use leptos::prelude::*;

/// Pulsing placeholder rows shown while real content is loading.
#[component]
pub fn Skeleton(
    /// Number of placeholder rows
    #[prop(default = 4)]
    rows: usize,
) -> impl IntoView {
    view! {
        <div class="skeleton">
            {(0..rows)
                .map(|i| {
                    // The last row is shorter, like a trailing line of text
                    let class = if i + 1 == rows {
                        "skeleton__line skeleton__line--short"
                    } else {
                        "skeleton__line"
                    };
                    view! { <div class=class></div> }
                })
                .collect_view()}
        </div>
    }
}
