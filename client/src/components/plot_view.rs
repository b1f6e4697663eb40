//! Interactive plot embedded in a chat bubble.

use leptos::prelude::*;
use plotchat::PlotPayload;

/// Draws `plot` with Plotly once the container element is mounted.
#[component]
pub fn PlotView(plot: PlotPayload) -> impl IntoView {
    let plot_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let Some(el) = plot_ref.get() else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            if let Err(err) = crate::util::plotly::draw(&el, &plot) {
                log::warn!("plot render failed: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (el, &plot);
        }
    });

    view! { <div class="plot" node_ref=plot_ref style="width: 100%; height: 400px;"></div> }
}
