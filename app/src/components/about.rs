//! About-the-developer panel. Static content only.

use dioxus::prelude::*;

use super::navbar::{HANDSHAKE_URL, LINKEDIN_URL};

const PORTRAIT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1560179707-f14e90ef3623?auto=format&fit=crop&q=80&w=800";

#[component]
pub fn AboutPanel() -> Element {
    rsx! {
        section { id: "about-me", class: "about-panel",
            h3 { "About the Developer" }
            div { class: "about-columns",
                div { class: "about-image",
                    img { src: PORTRAIT_IMAGE_URL, alt: "" }
                }
                div { class: "about-bio",
                    p {
                        strong { "Hi, my name is Christian Reveles." }
                    }
                    p {
                        "I am the developer behind "
                        strong { "RISKLY" }
                        ". My mission in creating this platform was to help audit and risk "
                        "professionals bridge the gap between complex financial data and "
                        "actionable insights using AI-driven intelligence."
                    }
                    p {
                        "As a student at the "
                        strong { "University of Arkansas" }
                        ", I built this simulator to demonstrate how modern technology can "
                        "automate the detection of critical anomalies, allowing human experts "
                        "to focus on high level strategy rather than manual data sorting."
                    }
                    p {
                        "I am passionate about using systems programming and modern data "
                        "visualization to make complex risks easy to understand at a glance."
                    }
                    p {
                        strong { "Connect with me:" }
                    }
                    ul { class: "about-links",
                        li {
                            a { href: LINKEDIN_URL, target: "_blank", "LinkedIn Profile" }
                        }
                        li {
                            a { href: HANDSHAKE_URL, target: "_blank", "Handshake Profile" }
                        }
                    }
                }
            }
        }
    }
}
