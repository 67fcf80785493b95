//! Card section - link, image with tag overlay, name/price and color/sale rows.

use crate::format::html_escape;
use crate::styles::StyleAttributes;
use crate::theme::Theme;
use crate::view::ShoeCardView;

/// Render the card markup.
///
/// Visibility and decoration come from `styles` as inline custom
/// properties on the article; the stylesheet from `render_card_styles`
/// reads them.
pub fn render_shoe_card(view: &ShoeCardView, styles: &StyleAttributes) -> String {
    let tag = view
        .tag
        .as_ref()
        .map(|tag| {
            format!(
                r#"<div class="shoe-card-tag">{}</div>"#,
                html_escape(&tag.label)
            )
        })
        .unwrap_or_default();

    let sale_price = view
        .sale_price
        .as_deref()
        .map(|price| {
            format!(
                r#"<span class="shoe-card-sale-price">{}</span>"#,
                html_escape(price)
            )
        })
        .unwrap_or_default();

    let price_class = if view.price.struck_through {
        "shoe-card-price struck"
    } else {
        "shoe-card-price"
    };

    format!(
        r#"<a href="{href}" class="shoe-card-link">
    <article class="shoe-card" data-variant="{variant}" style="{vars}">
        <div class="shoe-card-image">
            {tag}
            <img src="{src}" alt="{alt}">
        </div>
        <div class="spacer" style="height: {spacer}px"></div>
        <div class="shoe-card-row">
            <h3 class="shoe-card-name">{name}</h3>
            <span class="{price_class}">{price}</span>
        </div>
        <div class="shoe-card-row">
            <p class="shoe-card-colors">{colors}</p>
            {sale_price}
        </div>
    </article>
</a>"#,
        href = html_escape(&view.href),
        variant = view.variant,
        vars = html_escape(&styles.to_css_vars()),
        tag = tag,
        src = html_escape(&view.image.src),
        alt = html_escape(&view.image.alt),
        spacer = view.spacer_px,
        name = html_escape(&view.name),
        price_class = price_class,
        price = html_escape(&view.price.text),
        colors = html_escape(&view.color_info),
        sale_price = sale_price,
    )
}

/// Stylesheet for cards, filled in from the theme.
pub fn render_card_styles(theme: &Theme) -> String {
    format!(
        r#"<style>
.shoe-card-link {{ text-decoration: none; color: inherit; }}
.shoe-card {{ display: flex; flex-direction: column; max-width: 273px; }}
.shoe-card-image {{ position: relative; }}
.shoe-card-image img {{ width: 100%; }}
.shoe-card-tag {{
    position: absolute;
    top: 6px;
    right: -5px;
    display: var(--display);
    min-width: fit-content;
    padding: 4px;
    border-radius: 4px;
    background-color: var(--background-color);
    color: {white};
    font-weight: {medium};
    font-size: 0.875rem;
}}
.shoe-card-row {{ display: flex; justify-content: space-between; font-size: 1rem; }}
.shoe-card-name {{ font-weight: {medium}; color: {gray_900}; }}
.shoe-card-price {{ text-decoration: var(--text-decoration); font-weight: {normal}; color: {gray_700}; }}
.shoe-card-colors {{ font-weight: {normal}; color: {gray_700}; }}
.shoe-card-sale-price {{ display: var(--sale-display); font-weight: {medium}; color: {primary}; }}
</style>"#,
        white = theme.colors.white,
        medium = theme.weights.medium,
        normal = theme.weights.normal,
        gray_900 = theme.colors.gray_900,
        gray_700 = theme.colors.gray_700,
        primary = theme.colors.primary,
    )
}
