//! Hero panel with the product pitch.

use dioxus::prelude::*;

const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&q=80&w=1000";

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-copy",
                h1 { "Control & Risk Intelligence" }
                p { class: "hero-subtext",
                    "Connect, analyze, and transform audit data into actionable insights with Riskly's AI risk intelligence platform."
                }
                // Decorative call to action; no handler is attached.
                button { class: "cta-button", "Get Started Now" }
            }
            div { class: "hero-image",
                img { src: HERO_IMAGE_URL, alt: "" }
            }
        }
    }
}
