use log::debug;
use yew::prelude::*;

use crate::config;
use crate::reveal::{mount_hero, BrowserScheduler, BrowserViewport, Reveal};

pub const HEADLINE: &str =
    "Streamline your schedule. Effortlessly create, customize, and manage your perfect timetable";
pub const CTA_LABEL: &str = "Get Started";
pub const ARROW_ICON_SIZE: u32 = 20;

/// Full-bleed background that stays put while the content scrolls.
pub fn hero_background_style(image_url: &str) -> String {
    format!(
        "background-image: url({}); background-size: cover; background-position: center; background-attachment: fixed;",
        image_url
    )
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    #[prop_or(config::REVEAL_DELAY_MS)]
    pub reveal_delay_ms: u32,
}

impl Default for HomeProps {
    fn default() -> Self {
        Self {
            reveal_delay_ms: config::REVEAL_DELAY_MS,
        }
    }
}

#[function_component]
pub fn Home(props: &HomeProps) -> Html {
    let reveal = use_state(Reveal::default);

    // Scroll reset and delayed reveal, on initial mount only
    {
        let setter = reveal.setter();
        let delay = props.reveal_delay_ms;
        use_effect_with_deps(
            move |_| {
                let mut timer = mount_hero(&BrowserViewport, &BrowserScheduler, delay, move || {
                    setter.set(Reveal::Revealed);
                });

                move || {
                    if timer.is_pending() {
                        debug!("Home unmounted before reveal, cancelling timer");
                    }
                    timer.cancel();
                }
            },
            (),
        );
    }

    html! {
        <HeroView reveal={*reveal} />
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroViewProps {
    #[prop_or_default]
    pub reveal: Reveal,
}

/// Stateless hero markup for a given reveal variant.
#[function_component]
pub fn HeroView(props: &HeroViewProps) -> Html {
    let reveal = props.reveal;

    html! {
        <div class="container" style={hero_background_style(&config::background_image_url())}>
            <div class="thrive-container">
                <h1 class={reveal.headline_class()}>
                    {HEADLINE}
                </h1>
                <button class={classes!("button", reveal.button_class())}>
                    {CTA_LABEL}
                    <img
                        src={config::arrow_icon_url()}
                        alt="right-arrow"
                        class="arrow-icon"
                        height={ARROW_ICON_SIZE.to_string()}
                        width={ARROW_ICON_SIZE.to_string()}
                        style="padding-left: 15px;"
                    />
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_hero(reveal: Reveal) -> String {
        ServerRenderer::<HeroView>::with_props(move || HeroViewProps { reveal })
            .render()
            .await
    }

    fn assert_call_to_action(html: &str) {
        assert!(html.contains("Get Started"), "missing label in {}", html);
        assert!(html.contains(r#"class="arrow-icon""#));
        assert!(html.contains(r#"alt="right-arrow""#));
        assert!(html.contains(r#"height="20""#));
        assert!(html.contains(r#"width="20""#));
        assert!(html.contains(r#"style="padding-left: 15px;""#));
    }

    #[test]
    fn background_is_cover_centered_and_fixed() {
        let style = hero_background_style("/assets/bg.png");
        assert!(style.starts_with("background-image: url(/assets/bg.png);"));
        assert!(style.contains("background-size: cover;"));
        assert!(style.contains("background-position: center;"));
        assert!(style.contains("background-attachment: fixed;"));
    }

    #[test]
    fn default_props_use_configured_delay() {
        assert_eq!(HomeProps::default().reveal_delay_ms, config::REVEAL_DELAY_MS);
        let props = yew::props!(HomeProps {});
        assert_eq!(props.reveal_delay_ms, config::REVEAL_DELAY_MS);
    }

    #[tokio::test]
    async fn hidden_hero_renders_pre_animate_variants() {
        let html = render_hero(Reveal::Hidden).await;

        assert!(html.contains(r#"<h1 class="pre-animate">"#), "{}", html);
        assert!(html.contains(r#"class="button pre-animate""#), "{}", html);
        assert!(!html.contains("fade-in"));
        assert!(html.contains(HEADLINE));
        assert_call_to_action(&html);
    }

    #[tokio::test]
    async fn revealed_hero_renders_fade_in_variants() {
        let html = render_hero(Reveal::Revealed).await;

        assert!(html.contains(r#"<h1 class="fade-in">"#), "{}", html);
        assert!(html.contains(r#"class="button fade-in-delayed""#), "{}", html);
        assert!(!html.contains("pre-animate"));
        assert_call_to_action(&html);
    }

    #[tokio::test]
    async fn hero_container_carries_fixed_background() {
        let html = render_hero(Reveal::Hidden).await;

        assert!(html.contains(r#"class="container""#));
        assert!(html.contains(r#"class="thrive-container""#));
        assert!(html.contains("background-image: url(/assets/output-onlinepngtools.png);"));
        assert!(html.contains("background-attachment: fixed;"));
    }

    #[tokio::test]
    async fn home_mounts_with_no_props_in_pre_animate_state() {
        let html = ServerRenderer::<Home>::new().render().await;

        assert!(html.contains(r#"<h1 class="pre-animate">"#), "{}", html);
        assert!(html.contains(r#"class="button pre-animate""#), "{}", html);
        assert_call_to_action(&html);
    }
}
