//! Root document component - the complete pre-rendered HTML page

use super::LandingPage;
use crate::clock::FooterStamp;
use crate::styles::{stylesheet, CSP};
use leptos::prelude::*;

/// Page metadata for the pre-rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: String,
    pub description: String,
    pub lang: String,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            title: crate::content::BRAND_NAME.to_string(),
            description: "Turn ideas into reality with the right team.".to_string(),
            lang: "en".to_string(),
        }
    }
}

/// The complete HTML document. The steps grid is revealed up front since a
/// static page has no scroll observer.
#[component]
pub fn LandingDocument(meta: DocumentMeta, stamp: FooterStamp) -> impl IntoView {
    view! {
        <html lang=meta.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=meta.description />
                <title>{meta.title}</title>
                <style>{stylesheet()}</style>
            </head>
            <body>
                <LandingPage stamp=stamp revealed=true />
            </body>
        </html>
    }
}
