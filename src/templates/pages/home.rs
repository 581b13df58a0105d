// templates/pages/home.rs

use crate::templates::desktop_layout;
use maud::{html, Markup};

/// App shell; the listing grid is rendered client-side from /listings.
pub fn home_page() -> Markup {
    desktop_layout(
        "Asuntovahti",
        html! {
            main {
                section class="add-form" {
                    h1 { "Tracked listings" }
                    form id="add-listing-form" {
                        input type="url" id="listing-url" name="url"
                            placeholder="Paste a listing URL" required;
                        button type="submit" { "Add" }
                    }
                    p id="form-status" class="status" {}
                }

                section id="listings" class="listings" {
                    p class="empty" { "Loading listings…" }
                }
            }
        },
    )
}
