use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fi" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src="/static/app.js" defer {};
            }
            body {
                header class="topbar" {
                    h3 { "Asuntovahti" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/listings" { "JSON" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
