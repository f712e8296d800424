use chrono::{Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Premier Estates";

const ADDRESS: &str = "123 Main St, San Francisco, CA";
const PHONE: &str = "(555) 123-4567";
const EMAIL: &str = "info@premierestates.com";

fn home_icon() -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="brand-icon"
        {
            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
        }
    }
}

fn site_footer(contact_href: &str) -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-grid" {
                div {
                    div class="brand" {
                        (home_icon())
                        span { (SITE_NAME) }
                    }
                    p {
                        "Your trusted partner in finding the perfect home. "
                        "Exceptional service, exceptional properties."
                    }
                }
                div {
                    h3 { "Quick Links" }
                    ul {
                        li { a href="/#properties" { "Properties" } }
                        li { a href="/#about" { "About Us" } }
                        li { a href=(contact_href) { "Contact" } }
                    }
                }
                div {
                    h3 { "Property Types" }
                    ul {
                        li { "Houses" }
                        li { "Condos" }
                        li { "Apartments" }
                        li { "Townhouses" }
                    }
                }
                div class="footer-contact" {
                    h3 { "Contact Info" }
                    ul {
                        li { (ADDRESS) }
                        li { a href={ "tel:" (PHONE.replace(|c: char| !c.is_ascii_digit(), "")) } { (PHONE) } }
                        li { a href={ "mailto:" (EMAIL) } { (EMAIL) } }
                    }
                }
            }
            p class="copyright" { "© " (Utc::now().year()) " " (SITE_NAME) ". All rights reserved." }
        }
    }
}

pub fn desktop_layout(title: &str, contact_href: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="site-header" {
                  a class="brand" href="/" {
                      (home_icon())
                      span { (SITE_NAME) }
                  }
                  nav {
                      ul {
                          li { a href="/" { "Home" } }
                          li { a href="/#properties" { "Properties" } }
                          li { a href="/#about" { "About" } }
                      }
                  }

                  a href=(contact_href) class="btn primary" { "Contact Us" }
              }
                (content)
                (site_footer(contact_href))
            }
        }
    }
}
