use crate::clock::FooterStamp;
use crate::content::{ATTRIBUTION_NAME, ATTRIBUTION_URL, BRAND_NAME};
use crate::motion::Entrance;
use leptos::prelude::*;

#[component]
pub fn Footer(stamp: FooterStamp) -> impl IntoView {
    let copyright = format!("© Copyright {}", stamp.year);
    let server_time = format!("Server time: {}", stamp.timestamp);

    view! {
        <footer class="footer interactive enter" style=Entrance::FOOTER.style()>
            <div class="container">
                <div class="footer-row">
                    <span class="footer-brand">{BRAND_NAME}</span>
                    <span class="footer-muted">{copyright}</span>
                    <span class="footer-muted">"•"</span>
                    <a
                        href=ATTRIBUTION_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="footer-link"
                    >
                        {ATTRIBUTION_NAME}
                    </a>
                </div>
                <div class="footer-row">
                    <span class="footer-muted footer-time">{server_time}</span>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use leptos::tachys::view::RenderHtml;

    fn stamp() -> FooterStamp {
        FooterStamp::from_clock(&FixedClock::at(2026, 10, 18, 9, 30, 0).unwrap())
    }

    #[test]
    fn shows_brand_year_and_time() {
        let html = view! { <Footer stamp=stamp() /> }.to_html();

        assert!(html.contains("FindMyTeam"));
        assert!(html.contains("© Copyright 2026"));
        assert!(html.contains("Server time: 10/18/2026, 9:30:00 AM"));
    }

    #[test]
    fn attribution_opens_in_new_context() {
        let html = view! { <Footer stamp=stamp() /> }.to_html();

        assert!(html.contains("href=\"https://priyanshagarwal.me/\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("Priyansh Agarwal"));
    }
}
