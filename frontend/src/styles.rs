use stylist::GlobalStyle;

/// Rules for the landing hero. `pre-animate` is the resting state, the
/// fade-in variants transition out of it once the hero is revealed.
pub const HERO_STYLESHEET: &str = r#"
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .container {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .thrive-container {
        max-width: 900px;
        padding: 0 24px;
        text-align: center;
        color: #fff;
    }
    .thrive-container h1 {
        font-size: 3rem;
        line-height: 1.2;
        margin-bottom: 2rem;
    }
    .pre-animate {
        opacity: 0;
        transform: translateY(20px);
    }
    .fade-in {
        opacity: 1;
        transform: translateY(0);
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    }
    .fade-in-delayed {
        opacity: 1;
        transform: translateY(0);
        transition: opacity 0.8s ease-out 0.4s, transform 0.8s ease-out 0.4s;
    }
    .button {
        display: inline-flex;
        align-items: center;
        padding: 14px 28px;
        font-size: 1.1rem;
        color: #fff;
        background: #1e90ff;
        border: none;
        border-radius: 8px;
        cursor: pointer;
    }
    .arrow-icon {
        display: inline-block;
    }
"#;

/// Registers the stylesheet in the document head.
pub fn install() -> Result<GlobalStyle, stylist::Error> {
    GlobalStyle::new(HERO_STYLESHEET)
}
