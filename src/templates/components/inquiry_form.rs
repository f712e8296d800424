use crate::domain::InquiryForm;
use crate::params::PageParams;
use crate::templates::components::overlay;
use maud::{html, Markup};

/// What the form needs beyond the page params: the input so far,
/// the listing it is about, and the last error.
#[derive(Debug, Clone)]
pub struct InquiryVm<'a> {
    pub form: InquiryForm,
    pub listing_title: Option<&'a str>,
    pub error: Option<String>,
}

pub fn inquiry_form(vm: &InquiryVm, params: &PageParams, close_href: &str) -> Markup {
    let form = &vm.form;

    overlay(
        "inquiry",
        close_href,
        html! {
            h2 { "Get In Touch" }

            @if let Some(title) = vm.listing_title {
                div class="inquiry-about" {
                    p { "Inquiry about:" }
                    p { strong { (title) } }
                }
            }

            form method="post" action="/inquiries" class="inquiry-form" {
                @for (name, value) in params.filter_pairs() {
                    input type="hidden" name=(name) value=(value);
                }
                @if let Some(id) = &form.listing_id {
                    input type="hidden" name="listing_id" value=(id);
                }

                label for="name" { "Full Name *" }
                input type="text" id="name" name="name" value=(form.name) placeholder="John Doe" required;

                label for="email" { "Email Address *" }
                input type="email" id="email" name="email" value=(form.email) placeholder="john@example.com" autocomplete="email" required;

                label for="phone" { "Phone Number" }
                input type="tel" id="phone" name="phone" value=(form.phone) placeholder="(555) 123-4567";

                label for="message" { "Message *" }
                textarea id="message" name="message" rows="5" required
                    placeholder="Tell us more about what you're looking for..." { (form.message) }

                @if let Some(error) = &vm.error {
                    div class="form-error" role="alert" { (error) }
                }

                button type="submit" class="primary" { "Send Inquiry" }
            }
        },
    )
}
