//! CSS for the landing page.
//!
//! [`LANDING_CSS`] holds layout, theme and the generic entrance keyframes.
//! Hover and wiggle rules are generated from [`crate::motion`] so the numbers
//! live in one place. Use [`stylesheet`] to get all of it.
//!
//! The stylesheet is inlined as `<style>` text, so it avoids `>` and `&`.

use crate::motion::{HoverMotion, WIGGLE_DURATION, WIGGLE_KEYFRAMES};

/// Theme, layout and entrance animations.
pub const LANDING_CSS: &str = r#"
:root {
    --background: #09090b;
    --foreground: #fafafa;
    --card: #111114;
    --card-foreground: #fafafa;
    --muted-foreground: #a1a1aa;
    --primary: #6366f1;
    --accent-purple: #a855f7;
    --radius: 12px;
    --container-max: 1200px;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    min-height: 100vh;
    font-family: var(--font-sans);
    background: var(--background);
    color: var(--foreground);
    line-height: 1.5;
}

.landing {
    background: var(--background);
    transition: background-color 200ms, color 200ms;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

/* Background lines */

.background-lines {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    width: 100%;
    min-height: 100vh;
    padding: 0 16px;
    overflow: hidden;
    pointer-events: none;
}

.background-lines-svg {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    z-index: 0;
}

.background-line {
    stroke-dasharray: 50 800;
    stroke-dashoffset: 800;
    animation: line-drift 10s linear infinite;
}

.background-lines-content {
    position: relative;
    z-index: 1;
    width: 100%;
    display: flex;
    flex-direction: column;
    min-height: 100vh;
}

.interactive {
    pointer-events: auto;
}

@keyframes line-drift {
    0% { stroke-dashoffset: 800; }
    100% { stroke-dashoffset: 0; }
}

/* Entrances */

.enter {
    opacity: 0;
    animation-name: fade-up;
    animation-timing-function: ease-out;
    animation-fill-mode: both;
}

.steps-grid .step.enter {
    animation-name: none;
}

.steps-grid.in-view .step.enter {
    animation-name: fade-up;
}

@keyframes fade-up {
    from {
        opacity: 0;
        transform: translateY(var(--enter-offset, 0px));
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

/* Hero */

.hero-inner {
    padding: 48px 16px 64px;
}

.hero-title {
    font-size: 3.75rem;
    font-weight: 700;
    text-align: center;
    margin: 0 0 24px;
    color: var(--foreground);
}

.hero-subtitle {
    font-size: 1.25rem;
    text-align: center;
    color: var(--muted-foreground);
    max-width: 42rem;
    margin: 0 auto 48px;
}

.hero-actions {
    display: flex;
    justify-content: center;
}

.cta {
    position: relative;
}

.cta-glow {
    position: absolute;
    inset: -2px;
    border-radius: 9999px;
    background: linear-gradient(90deg, var(--primary), var(--accent-purple), var(--primary));
    background-size: 200% 200%;
    filter: blur(4px);
    opacity: 0.75;
    transition: opacity 1000ms;
    animation: border-flow 3s ease infinite;
}

.cta:hover .cta-glow {
    opacity: 1;
    transition-duration: 300ms;
}

.cta-pill {
    position: relative;
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 10px 20px;
    border: 1px solid transparent;
    border-radius: 9999px;
    background: var(--background);
    color: var(--muted-foreground);
    font-size: 0.875rem;
    font-weight: 500;
    transition: transform 150ms ease-out;
}

@keyframes border-flow {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
}

/* Steps grid */

.steps-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

@media (min-width: 768px) {
    .steps-grid {
        grid-template-columns: repeat(4, minmax(0, 1fr));
    }
}

.step {
    position: relative;
    transition: translate 200ms ease-out;
}

.step-card {
    text-align: center;
    padding: 24px;
    border-radius: var(--radius);
    background: var(--card);
    color: var(--card-foreground);
    box-shadow: 0 10px 15px -3px rgba(99, 102, 241, 0.1);
    transition: transform 200ms ease-out;
}

.step-icon {
    display: flex;
    justify-content: center;
    margin-bottom: 16px;
    color: var(--primary);
}

.step-title {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0 0 8px;
    color: var(--foreground);
}

.step-description {
    margin: 0;
    color: var(--muted-foreground);
}

/* Footer */

.footer {
    width: 100%;
    margin-top: auto;
}

.footer .container {
    padding-top: 16px;
    padding-bottom: 16px;
}

.footer-row {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    text-align: center;
}

.footer-row:first-child {
    padding-top: 16px;
}

.footer-brand {
    font-weight: 600;
    color: var(--primary);
}

.footer-muted,
.footer-link {
    color: var(--muted-foreground);
    padding: 0 4px;
}

.footer-time {
    padding: 0;
}

.footer-link {
    text-decoration: none;
    transition: color 150ms;
}

.footer-link:hover {
    color: var(--primary);
}
"#;

/// Turns motion off for users who ask for it. Emitted after every animated
/// rule, and each selector matches the specificity of the rule it cancels.
pub const REDUCED_MOTION_CSS: &str = r#"
@media (prefers-reduced-motion: reduce) {
    .enter,
    .steps-grid.in-view .step.enter {
        animation: none;
        opacity: 1;
    }

    .background-line,
    .cta-glow,
    .step-icon.wiggle {
        animation: none;
    }

    .step:hover {
        translate: none;
    }

    .cta:hover .cta-pill,
    .cta:active .cta-pill {
        transform: none;
    }
}
"#;

/// Content Security Policy for the pre-rendered page (no scripts needed)
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'none'; connect-src 'none';";

/// Hover, press and wiggle rules built from the motion constants.
pub fn motion_css() -> String {
    let card = HoverMotion::CARD;
    let cta = HoverMotion::CTA;

    let last = WIGGLE_KEYFRAMES.len().saturating_sub(1).max(1) as f32;
    let frames: String = WIGGLE_KEYFRAMES
        .iter()
        .enumerate()
        .map(|(i, deg)| {
            let pct = (i as f32 / last * 100.0).round();
            format!("    {pct}% {{ transform: rotate({deg}deg); }}\n")
        })
        .collect();

    let mut css = format!(
        ".step:hover {{\n    translate: 0 -{lift}px;\n}}\n\n\
         .cta:hover .cta-pill {{\n    transform: scale({hover});\n}}\n\n",
        lift = card.lift,
        hover = cta.scale,
    );
    if let Some(press) = cta.press_scale {
        css.push_str(&format!(
            ".cta:active .cta-pill {{\n    transform: scale({press});\n}}\n\n"
        ));
    }
    css.push_str(&format!(
        ".step-icon.wiggle {{\n    animation: wiggle {WIGGLE_DURATION}s ease-in-out;\n}}\n\n\
         @keyframes wiggle {{\n{frames}}}\n"
    ));
    css
}

/// Full stylesheet: [`LANDING_CSS`], then [`motion_css`], then
/// [`REDUCED_MOTION_CSS`] so the overrides win ties.
pub fn stylesheet() -> String {
    format!("{LANDING_CSS}\n{}\n{REDUCED_MOTION_CSS}", motion_css())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_is_safe_to_inline() {
        let css = stylesheet();
        assert!(!css.contains('>'));
        assert!(!css.contains('&'));
        assert!(!css.contains('<'));
    }

    #[test]
    fn declares_every_keyframe_used() {
        let css = stylesheet();
        for name in ["fade-up", "wiggle", "border-flow", "line-drift"] {
            assert!(css.contains(&format!("@keyframes {name}")), "{name}");
        }
    }

    #[test]
    fn wiggle_frames_follow_motion_constants() {
        let css = motion_css();
        assert!(css.contains("0% { transform: rotate(0deg); }"));
        assert!(css.contains("33% { transform: rotate(-10deg); }"));
        assert!(css.contains("67% { transform: rotate(10deg); }"));
        assert!(css.contains("100% { transform: rotate(0deg); }"));
        assert!(css.contains("animation: wiggle 0.5s"));
    }

    #[test]
    fn reduced_motion_overrides_come_last() {
        let css = stylesheet();
        let overrides = css.find("@media (prefers-reduced-motion: reduce)").unwrap();

        for rule in [
            ".step-icon.wiggle {\n    animation: wiggle",
            ".steps-grid.in-view .step.enter {\n    animation-name: fade-up",
            ".step:hover {\n    translate:",
            ".cta:active .cta-pill {",
        ] {
            let at = css.find(rule).unwrap_or_else(|| panic!("missing rule: {rule}"));
            assert!(at < overrides, "{rule} is declared after the reduced-motion block");
        }
        assert!(css[overrides..].contains(".steps-grid.in-view .step.enter {"));
        assert!(css[overrides..].contains(".step-icon.wiggle {"));
    }

    #[test]
    fn hover_rules_follow_motion_constants() {
        let css = motion_css();
        assert!(css.contains("translate: 0 -10px;"));
        assert!(css.contains("transform: scale(1.02);"));
        assert!(css.contains("transform: scale(0.98);"));
    }
}
