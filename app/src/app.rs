//! Application shell: page metadata, global assets, and section layout.

use dioxus::prelude::*;

use crate::components::{AboutPanel, Hero, Navbar, ResultPanel, UploadPanel};
use crate::state::use_simulator_provider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Chart emoji favicon, inlined so no binary asset is needed.
const FAVICON_DATA_URL: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>📈</text></svg>";

const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";
const ECHARTS_JS: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";

#[component]
pub fn App() -> Element {
    use_simulator_provider();

    rsx! {
        document::Title { "RISKLY | AI Audit & Risk Management" }
        document::Link { rel: "icon", href: FAVICON_DATA_URL }
        document::Stylesheet { href: MAIN_CSS }
        document::Stylesheet { href: FONT_AWESOME_CSS }
        document::Script { src: ECHARTS_JS }

        div { class: "page",
            Navbar {}
            Hero {}
            hr { class: "section-divider" }
            section { class: "simulator",
                h3 { "Interactive Risk Simulator" }
                div { class: "simulator-columns",
                    UploadPanel {}
                    ResultPanel {}
                }
            }
            hr { class: "section-divider" }
            AboutPanel {}
        }
    }
}
