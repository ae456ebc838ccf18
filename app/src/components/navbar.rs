//! Fixed top navigation bar.

use dioxus::prelude::*;

/// Outbound profile links, shared with the about panel.
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/christian-reveles-373095324/";
pub const HANDSHAKE_URL: &str = "https://uark.joinhandshake.com/profiles/christianreveles";

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div { class: "navbar",
            div { class: "logo", "RISKLY." }
            div { class: "nav-links",
                a { href: LINKEDIN_URL, target: "_blank", "LINKEDIN" }
                a { href: HANDSHAKE_URL, target: "_blank", "HANDSHAKE" }
                a { href: "#about-me", "ABOUT ME" }
            }
        }
    }
}
