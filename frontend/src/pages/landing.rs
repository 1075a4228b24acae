use chrono::Datelike;
use yew::prelude::*;

use crate::animation::ambient::{use_ambient_tween, HERO_DRIFT, HERO_FLOAT};
use crate::animation::reveal::use_reveal;
use crate::components::icons::{Icon, IconView};
use crate::components::nav::Nav;
use crate::components::particle_field::ParticleField;
use crate::config;
use crate::content::{SectionId, FEATURES, STATS, STEPS, TESTIMONIALS};
use crate::navigation::MenuState;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_default]
    pub initial_theme: Theme,
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    theme: Theme,
    #[prop_or_default]
    node: NodeRef,
    #[prop_or_default]
    reveal: Classes,
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    theme: Theme,
    /// Fired when an in-page anchor in the hero is followed.
    on_navigate: Callback<()>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let tokens = props.theme.tokens();
    let headline_ref = use_node_ref();
    let mockup_ref = use_node_ref();
    use_ambient_tween(headline_ref.clone(), HERO_FLOAT);
    use_ambient_tween(mockup_ref.clone(), HERO_DRIFT);

    let on_demo = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(()))
    };

    html! {
        <section class="hero" data-section={SectionId::Hero.key()}>
            <ParticleField />
            <div class="hero-copy">
                <h1 class="hero-title" ref={headline_ref}>
                    <span class="gradient-text">{"Smarter Logistics,"}</span>
                    <br />
                    <span class="muted-text">{"Seamless Delivery."}</span>
                </h1>
                <p class={classes!("hero-subtitle", tokens.secondary_text)}>
                    {"N-Track connects businesses, drivers, and customers on one platform with real-time tracking, analytics, and optimized deliveries."}
                </p>
                <div class="hero-cta-group">
                    <a href={config::get_platform_url()} class="gradient-button">
                        {"Launch Platform"}
                        <IconView icon={Icon::ArrowRight} size={18} />
                    </a>
                    <a href="#how-it-works" class="gradient-button" onclick={on_demo}>
                        <IconView icon={Icon::PlayCircle} size={18} />
                        {"Watch Demo"}
                    </a>
                </div>
                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div class="glass-card stat-card">
                            <IconView icon={stat.icon} size={18} class={classes!("stat-icon")} />
                            <div class="stat-value">{stat.value}</div>
                            <div class={classes!("stat-label", tokens.secondary_text)}>{stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>
            <div class="hero-image">
                <img src="/assets/mockup.png" alt="N-Track app mockup" ref={mockup_ref} />
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works(props: &SectionProps) -> Html {
    let tokens = props.theme.tokens();
    html! {
        <section
            id={SectionId::HowItWorks.anchor()}
            data-section={SectionId::HowItWorks.key()}
            class={classes!("page-section", tokens.band, props.reveal.clone())}
            ref={props.node.clone()}
        >
            <div class="section-inner">
                <h2 class="section-title">{"How It Works"}</h2>
                <div class="steps-grid">
                    { for STEPS.iter().map(|step| html! {
                        <div class="glass-card step-card" key={step.number}>
                            <div class="icon-badge round"><IconView icon={step.icon} /></div>
                            <div class="step-number">{step.number}</div>
                            <h3>{step.title}</h3>
                            <p class={tokens.secondary_text}>{step.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features(props: &SectionProps) -> Html {
    let tokens = props.theme.tokens();
    html! {
        <section
            id={SectionId::Features.anchor()}
            data-section={SectionId::Features.key()}
            class={classes!("page-section", props.reveal.clone())}
            ref={props.node.clone()}
        >
            <div class="section-inner">
                <h2 class="section-title">{"Powerful Features"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="glass-card feature-card">
                            <div class="icon-badge"><IconView icon={feature.icon} /></div>
                            <div>
                                <h3>{feature.title}</h3>
                                <p class={tokens.secondary_text}>{feature.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials(props: &SectionProps) -> Html {
    html! {
        <section
            id={SectionId::Testimonials.anchor()}
            data-section={SectionId::Testimonials.key()}
            class={classes!("page-section", "layered", props.theme.testimonials_band(), props.reveal.clone())}
            ref={props.node.clone()}
        >
            <ParticleField />
            <div class="section-inner">
                <h2 class="section-title">{"Testimonials"}</h2>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <div class="glass-card testimonial-card">
                            <p class="quote">{testimonial.quote}</p>
                            <div class="author">{testimonial.author}</div>
                            <div class="role">{testimonial.role}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action(props: &SectionProps) -> Html {
    html! {
        <section
            id={SectionId::Cta.anchor()}
            data-section={SectionId::Cta.key()}
            class={classes!("page-section", "layered", props.reveal.clone())}
            ref={props.node.clone()}
        >
            <ParticleField />
            <div class="section-inner cta-grid">
                <div>
                    <h2 class="cta-title">
                        <span class="gradient-text">{"Ready to Transform"}</span>
                        <br />
                        <span class="muted-text">{"Your Logistics?"}</span>
                    </h2>
                    <p class="cta-text">{"Join hundreds of enterprises optimizing their supply chain with N-Track."}</p>
                    <a href={config::get_platform_url()} class="gradient-button large">
                        {"Launch Platform"}
                        <IconView icon={Icon::ArrowRight} />
                    </a>
                </div>
                <div class="cta-image">
                    <img src="/assets/transform.png" alt="Transform Logistics" />
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer" data-section={SectionId::Footer.key()}>
            <div class="footer-inner">
                <div class="footer-top">
                    <img src="/assets/logo.png" alt="N-Track" class="footer-logo" />
                    <div class="social-links">
                        <span class="social-icon" title="Twitter"><IconView icon={Icon::Twitter} size={20} /></span>
                        <span class="social-icon" title="LinkedIn"><IconView icon={Icon::Linkedin} size={20} /></span>
                        <span class="social-icon" title="Facebook"><IconView icon={Icon::Facebook} size={20} /></span>
                    </div>
                </div>
                <p class="copyright">{format!("© {} N-Track. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingProps) -> Html {
    let initial_theme = props.initial_theme;
    let theme = use_state(move || initial_theme);
    let menu = use_state(MenuState::default);

    let how_ref = use_node_ref();
    let features_ref = use_node_ref();
    let testimonials_ref = use_node_ref();
    let cta_ref = use_node_ref();
    let reveal = use_reveal(vec![
        how_ref.clone(),
        features_ref.clone(),
        testimonials_ref.clone(),
        cta_ref.clone(),
    ]);

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| theme.set(theme.toggled()))
    };
    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(menu.toggled()))
    };
    let on_navigate = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(menu.after_navigation()))
    };

    let theme = *theme;
    let tokens = theme.tokens();

    html! {
        <div class={classes!("landing-page", tokens.background, tokens.text)}>
            <Nav
                theme={theme}
                menu={*menu}
                on_toggle_theme={on_toggle_theme}
                on_toggle_menu={on_toggle_menu}
                on_navigate={on_navigate.clone()}
            />
            <main class="page-main">
                <Hero theme={theme} on_navigate={on_navigate} />
                <HowItWorks theme={theme} node={how_ref} reveal={reveal.classes(SectionId::HowItWorks)} />
                <Features theme={theme} node={features_ref} reveal={reveal.classes(SectionId::Features)} />
                <Testimonials theme={theme} node={testimonials_ref} reveal={reveal.classes(SectionId::Testimonials)} />
                <CallToAction theme={theme} node={cta_ref} reveal={reveal.classes(SectionId::Cta)} />
                <Footer />
            </main>
            <style>{LANDING_CSS}</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        font-family: 'Inter', system-ui, sans-serif;
        transition: background-color 0.5s ease, color 0.5s ease;
        animation: page-fade 0.6s ease both;
        overflow-x: hidden;
    }

    .bg-night { background-color: #030712; }
    .bg-day { background-color: #ffffff; }
    .bg-band-night { background-color: rgba(17, 24, 39, 0.4); }
    .bg-band-day { background-color: #f3f4f6; }
    .text-on-night { color: #ffffff; }
    .text-on-day { color: #111827; }
    .text-subtle-night { color: #9ca3af; }
    .text-subtle-day { color: #4b5563; }
    .muted-text { color: #9ca3af; }

    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 30;
        background: rgba(0, 0, 0, 0.5);
        border-bottom: 1px solid rgba(255, 255, 255, 0.2);
        backdrop-filter: blur(4px);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
    }

    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .nav-logo { height: 3rem; width: 3rem; }

    .nav-links {
        display: flex;
        align-items: center;
        gap: 1.5rem;
        font-size: 0.875rem;
    }

    .nav-link, .mobile-link {
        color: inherit;
        text-decoration: none;
        transition: color 0.2s;
    }

    .nav-link:hover, .mobile-link:hover, .social-icon:hover { color: #60a5fa; }

    .nav-compact { display: none; gap: 0.75rem; margin-left: auto; }

    .icon-button {
        display: inline-flex;
        padding: 0.5rem;
        border-radius: 0.5rem;
        color: inherit;
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid rgba(255, 255, 255, 0.2);
        cursor: pointer;
        transition: background 0.2s;
    }

    .icon-button:hover { background: rgba(255, 255, 255, 0.2); }

    .mobile-menu {
        padding: 0 1rem 1rem;
        border-top: 1px solid rgba(255, 255, 255, 0.2);
        animation: menu-open 0.25s ease both;
    }

    .mobile-link { display: block; padding: 0.75rem 0; }

    .page-main { padding-top: 7rem; }

    .hero {
        position: relative;
        max-width: 80rem;
        margin: 0 auto;
        padding: 5rem 1.5rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }

    .particle-layer { position: absolute; inset: 0; z-index: 0; pointer-events: none; }
    .particle-canvas { width: 100%; height: 100%; display: block; }

    .hero-copy {
        position: relative;
        z-index: 10;
        animation: hero-rise 1s ease both;
    }

    .hero-title {
        font-size: 3.75rem;
        font-weight: 900;
        line-height: 1.1;
        margin: 0;
    }

    .gradient-text {
        color: transparent;
        background: linear-gradient(to right, #60a5fa, #a855f7);
        -webkit-background-clip: text;
        background-clip: text;
    }

    .hero-subtitle { margin-top: 1rem; font-size: 1.125rem; }

    .hero-cta-group { margin-top: 1.5rem; display: flex; gap: 1rem; flex-wrap: wrap; }

    .gradient-button {
        position: relative;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        font-weight: 600;
        color: #ffffff;
        text-decoration: none;
        background: linear-gradient(90deg, #3b82f6, #9333ea, #3b82f6);
        background-size: 200% 100%;
        animation: gradient-shift 4s ease infinite;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
        transition: transform 0.3s;
    }

    .gradient-button:hover { transform: scale(1.05); }
    .gradient-button:active { transform: scale(0.97); }
    .gradient-button.large { font-size: 1.125rem; }

    .stats-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1rem;
        margin-top: 2.5rem;
    }

    .glass-card {
        backdrop-filter: blur(40px);
        background: rgba(255, 255, 255, 0.08);
        border: 1px solid rgba(255, 255, 255, 0.2);
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3);
        border-radius: 1rem;
        transition: transform 0.3s;
    }

    .stat-card { padding: 1rem; text-align: center; border-radius: 0.75rem; }
    .stat-card:hover { transform: scale(1.06); }
    .stat-icon { color: #60a5fa; }
    .stat-value { font-weight: 700; font-size: 1.5rem; }
    .stat-label { font-size: 0.875rem; }

    .hero-image {
        position: relative;
        z-index: 10;
        display: flex;
        justify-content: flex-end;
        animation: hero-slide 1s ease 0.3s both;
    }

    .hero-image img, .cta-image img {
        width: 100%;
        max-width: 32rem;
        border-radius: 1.5rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
    }

    .page-section { position: relative; padding: 5rem 0; }
    .page-section.layered > .section-inner { position: relative; z-index: 10; }

    .reveal-section {
        opacity: 0;
        transform: translateY(50px);
        transition: opacity 1s ease, transform 1s ease;
    }

    .reveal-section.revealed { opacity: 1; transform: translateY(0); }

    .section-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
    .section-title { font-size: 2.25rem; font-weight: 700; text-align: center; margin: 0 0 2.5rem; }

    .steps-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }

    .step-card {
        padding: 1.5rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        cursor: pointer;
    }

    .step-card:hover { transform: scale(1.08); }
    .step-number { font-size: 0.875rem; font-weight: 700; color: #60a5fa; }

    .icon-badge {
        display: inline-flex;
        padding: 1rem;
        border-radius: 0.75rem;
        color: #ffffff;
        background: linear-gradient(to bottom right, #3b82f6, #9333ea);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
        margin-bottom: 0.75rem;
    }

    .icon-badge.round { border-radius: 9999px; }

    .features-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }

    .feature-card { padding: 1.5rem; display: flex; align-items: center; gap: 1rem; }
    .feature-card:hover { transform: scale(1.06); }

    .testimonials-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
    .testimonial-card { padding: 2rem; text-align: center; }
    .testimonial-card:hover { transform: scale(1.05); }
    .quote { font-style: italic; margin-bottom: 1rem; }
    .author { font-weight: 600; }
    .role { font-size: 0.75rem; color: #9ca3af; margin-top: 0.25rem; }

    .cta-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
    .cta-title { font-size: 3rem; font-weight: 900; line-height: 1.1; margin: 0 0 1.5rem; }
    .cta-text { font-size: 1.25rem; color: #d1d5db; margin-bottom: 2rem; }
    .cta-image { display: flex; justify-content: flex-end; }

    .site-footer {
        padding: 2.5rem 0;
        backdrop-filter: blur(24px);
        background: rgba(255, 255, 255, 0.1);
        border-top: 1px solid rgba(255, 255, 255, 0.2);
        animation: footer-rise 0.8s ease both;
    }

    .footer-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; display: flex; flex-direction: column; gap: 2.5rem; }
    .footer-top { display: flex; align-items: center; justify-content: space-between; gap: 1rem; }
    .footer-logo { height: 2.5rem; width: 2.5rem; }
    .social-links { display: flex; gap: 1.5rem; }
    .social-icon { cursor: pointer; transition: color 0.2s; }
    .copyright { text-align: center; font-size: 0.875rem; color: #9ca3af; }

    @keyframes page-fade { from { opacity: 0; } to { opacity: 1; } }
    @keyframes hero-rise { from { opacity: 0; transform: translateY(60px); } to { opacity: 1; transform: translateY(0); } }
    @keyframes hero-slide { from { opacity: 0; transform: translateX(60px); } to { opacity: 1; transform: translateX(0); } }
    @keyframes footer-rise { from { opacity: 0; transform: translateY(40px); } to { opacity: 1; transform: translateY(0); } }
    @keyframes menu-open { from { opacity: 0; max-height: 0; } to { opacity: 1; max-height: 20rem; } }
    @keyframes gradient-shift {
        0% { background-position: 0% 50%; }
        50% { background-position: 100% 50%; }
        100% { background-position: 0% 50%; }
    }

    @media (max-width: 1024px) {
        .hero, .cta-grid { grid-template-columns: 1fr; }
        .hero-image, .cta-image { justify-content: center; }
        .hero-title { font-size: 2.5rem; }
    }

    @media (max-width: 768px) {
        .nav-links { display: none; }
        .nav-compact { display: flex; }
        .stats-grid { grid-template-columns: repeat(2, 1fr); }
        .steps-grid, .features-grid, .testimonials-grid { grid-template-columns: 1fr; }
        .feature-card { flex-direction: column; text-align: center; }
        .page-main { padding-top: 5rem; }
    }
"#;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(initial_theme: Theme) -> String {
        ServerRenderer::<LandingPage>::with_props(move || LandingProps { initial_theme })
            .render()
            .await
    }

    /// Rendered markup without the trailing stylesheet.
    fn body(html: &str) -> &str {
        &html[..html.find("<style>").unwrap_or(html.len())]
    }

    /// Catalog text as it appears in rendered markup.
    fn escaped(text: &str) -> String {
        text.replace('&', "&amp;")
    }

    fn position(html: &str, section: SectionId) -> usize {
        let marker = format!("data-section=\"{}\"", section.key());
        html.find(&marker)
            .unwrap_or_else(|| panic!("section {} missing", section.key()))
    }

    #[tokio::test]
    async fn default_render_is_dark_with_closed_menu() {
        let html = render(Theme::default()).await;
        let body = body(&html);
        assert!(body.contains("bg-night"));
        assert!(body.contains("text-on-night"));
        assert!(body.contains("text-subtle-night"));
        assert!(!body.contains("bg-day"));
        assert!(!body.contains("mobile-menu"));
        assert!(body.contains("aria-label=\"Toggle menu\""));
    }

    #[tokio::test]
    async fn sections_render_in_fixed_order() {
        let html = render(Theme::default()).await;
        let positions: Vec<_> = SectionId::ORDER.iter().map(|s| position(&html, *s)).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[tokio::test]
    async fn light_theme_substitutes_every_token() {
        let html = render(Theme::Light).await;
        for token in ["bg-day", "text-on-day", "text-subtle-day", "bg-band-day"] {
            assert!(html.contains(token), "missing {}", token);
        }
        for section in SectionId::ORDER {
            position(&html, section);
        }
        let body = body(&html);
        for token in ["bg-night", "text-on-night", "text-subtle-night", "bg-band-night"] {
            assert!(!body.contains(token), "dark token {} leaked", token);
        }
    }

    #[tokio::test]
    async fn renders_catalog_content() {
        let html = render(Theme::default()).await;
        for step in STEPS {
            assert!(html.contains(&escaped(step.title)), "step {} missing", step.title);
            assert!(html.contains(step.number));
        }
        for feature in FEATURES {
            assert!(html.contains(&escaped(feature.title)), "feature {} missing", feature.title);
        }
        for stat in STATS {
            assert!(html.contains(&escaped(stat.label)), "stat {} missing", stat.label);
        }
        for testimonial in TESTIMONIALS {
            assert!(html.contains(&escaped(testimonial.author)), "author {} missing", testimonial.author);
        }
        assert!(html.contains("Deliver &amp; Confirm"));
    }

    #[tokio::test]
    async fn anchors_resolve_to_sections() {
        let html = render(Theme::default()).await;
        for id in ["features", "how-it-works", "testimonials", "contact"] {
            assert!(html.contains(&format!("href=\"#{}\"", id)), "link #{} missing", id);
            assert!(html.contains(&format!("id=\"{}\"", id)), "target #{} missing", id);
        }
    }

    #[tokio::test]
    async fn sections_start_pending() {
        let html = render(Theme::default()).await;
        let body = body(&html);
        assert_eq!(body.matches("reveal-section").count(), 4);
        assert!(!body.contains("revealed"));
    }
}
