//! HTML rendering for site pages.
//!
//! Templates are `maud` markup; every interpolated value is escaped.

use maud::{DOCTYPE, Markup, html};

use crate::config::SiteConfig;
use crate::data::PostalCodeEntry;
use crate::route::{UrlPath, canton_url, district_url, province_url, whatsapp_share_url};

use super::page::{Page, PageKind, SitePages};

/// Render a complete HTML document for `page`.
pub fn render_page(page: &Page<'_>, site: &SitePages<'_>, config: &SiteConfig) -> String {
    let (title, description) = page_title(page, config);
    let head_title = match page.kind {
        PageKind::Home { .. } => title.clone(),
        _ => format!("{title} | {}", config.site.title),
    };
    let base_url = config.base_url();
    let canonical = (!base_url.is_empty()).then(|| page.url.to_absolute(base_url));

    let markup = html! {
        (DOCTYPE)
        html lang=(config.site.language) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (head_title) }
                meta name="description" content=(description);
                @if let Some(href) = &canonical {
                    link rel="canonical" href=(href);
                }
            }
            body {
                (breadcrumbs(page, site))
                main {
                    h1 { (title) }
                    (page_body(page, site, config))
                }
            }
        }
    };
    markup.into_string()
}

fn page_body(page: &Page<'_>, site: &SitePages<'_>, config: &SiteConfig) -> Markup {
    match &page.kind {
        PageKind::Home { provinces } => html! {
            @if !config.site.description.is_empty() {
                p { (config.site.description) }
            }
            (link_list(site, provinces.iter().map(|p| (*p, province_url(p)))))
        },
        PageKind::Province {
            province,
            cantons,
            districts,
        } => html! {
            h2 { "Cantones" }
            (link_list(site, cantons.iter().map(|c| (*c, canton_url(province, c)))))
            h2 { "Distritos" }
            (district_table(site, districts, true))
        },
        PageKind::Canton { districts, .. } => district_table(site, districts, false),
        PageKind::District { entry } => district_detail(entry),
    }
}

/// `(title, meta description)` for a page.
fn page_title(page: &Page<'_>, config: &SiteConfig) -> (String, String) {
    match &page.kind {
        PageKind::Home { .. } => (config.site.title.clone(), config.site.description.clone()),
        PageKind::Province { province, .. } => (
            format!("Códigos postales de {province}"),
            format!("Cantones, distritos y códigos postales de la provincia de {province}, Costa Rica."),
        ),
        PageKind::Canton {
            province, canton, ..
        } => (
            format!("Códigos postales de {canton}, {province}"),
            format!("Distritos y códigos postales del cantón de {canton}, {province}, Costa Rica."),
        ),
        PageKind::District { entry } => (
            format!("Código postal de {}, {}", entry.district, entry.canton),
            format!(
                "El código postal de {}, {}, {} es {}.",
                entry.district, entry.canton, entry.province, entry.postal_code
            ),
        ),
    }
}

fn breadcrumbs(page: &Page<'_>, site: &SitePages<'_>) -> Markup {
    let crumbs = site.breadcrumbs(page);
    html! {
        @if !crumbs.is_empty() {
            nav aria-label="breadcrumb" {
                ol {
                    @for crumb in &crumbs {
                        li { a href=(crumb.url.as_str()) { (crumb.kind.label()) } }
                    }
                    li aria-current="page" { (page.kind.label()) }
                }
            }
        }
    }
}

/// Link if the target page was generated, plain text otherwise.
fn link(site: &SitePages<'_>, text: &str, url: &str) -> Markup {
    html! {
        @if site.get(&UrlPath::from_page(url)).is_some() {
            a href=(url) { (text) }
        } @else {
            (text)
        }
    }
}

fn link_list<'a>(site: &SitePages<'_>, items: impl Iterator<Item = (&'a str, String)>) -> Markup {
    html! {
        ul {
            @for (text, url) in items {
                li { (link(site, text, &url)) }
            }
        }
    }
}

fn district_table(site: &SitePages<'_>, districts: &[&PostalCodeEntry], with_canton: bool) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Distrito" }
                    @if with_canton {
                        th { "Cantón" }
                    }
                    th { "Código postal" }
                }
            }
            tbody {
                @for entry in districts {
                    tr {
                        td { (link(site, &entry.district, &district_url(&entry.province, &entry.canton, &entry.district))) }
                        @if with_canton {
                            td { (entry.canton) }
                        }
                        td { (entry.postal_code) }
                    }
                }
            }
        }
    }
}

fn district_detail(entry: &PostalCodeEntry) -> Markup {
    let share = whatsapp_share_url(
        &entry.province,
        &entry.canton,
        &entry.district,
        &entry.postal_code,
    );
    html! {
        dl {
            dt { "Provincia" } dd { (entry.province) }
            dt { "Cantón" } dd { (entry.canton) }
            dt { "Distrito" } dd { (entry.district) }
            dt { "Código postal" } dd { (entry.postal_code) }
        }
        p {
            a href=(share) rel="noopener" target="_blank" { "Compartir por WhatsApp" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PostalCodes, test_dataset};

    fn render(data: &PostalCodes, url: &str) -> String {
        let site = SitePages::collect(data);
        let page = site.get(&UrlPath::from_page(url)).unwrap();
        render_page(page, &site, &SiteConfig::default())
    }

    #[test]
    fn test_render_home_lists_provinces() {
        let html = render(&test_dataset(), "/");
        assert!(html.contains("<html lang=\"es\">"));
        assert!(html.contains("<a href=\"/codigo-postal/limon/\">Limón</a>"));
        assert!(html.contains(
            "<link rel=\"canonical\" href=\"https://seo-postal-code.vercel.app/\">"
        ));
        assert!(!html.contains("breadcrumb"));
    }

    #[test]
    fn test_render_district_page() {
        let html = render(&test_dataset(), "/codigo-postal/san-jose/escazu/san-rafael/");
        assert!(html.contains(
            "<title>Código postal de San Rafael, Escazú | Códigos Postales de Costa Rica</title>"
        ));
        assert!(html.contains("<h1>Código postal de San Rafael, Escazú</h1>"));
        assert!(html.contains("<dd>10203</dd>"));
        assert!(html.contains("https://wa.me/?text="));
        assert!(html.contains("<a href=\"/codigo-postal/san-jose/escazu/\">Escazú</a>"));
        assert!(html.contains("<li aria-current=\"page\">San Rafael</li>"));
    }

    #[test]
    fn test_render_province_table() {
        let html = render(&test_dataset(), "/codigo-postal/alajuela/");
        let carrizal = html.find("Carrizal").unwrap();
        let guacima = html.find("Guácima").unwrap();
        assert!(carrizal < guacima);
        assert!(html.contains("<th>Cantón</th>"));
    }

    #[test]
    fn test_render_canton_has_no_canton_column() {
        let html = render(&test_dataset(), "/codigo-postal/limon/pococi/");
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"es\"><head><meta charset=\"utf-8\">"));
        assert!(!html.contains("<th>Cantón</th>"));
        assert!(html.contains("<td>70201</td>"));
    }

    #[test]
    fn test_render_escapes_names() {
        let data = PostalCodes::from(vec![PostalCodeEntry::new(
            "A & B",
            "<Centro>",
            "Norte",
            "10101",
        )]);
        let html = render(&data, "/codigo-postal/a-b/centro/");
        assert!(html.contains("&lt;Centro&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(!html.contains("<Centro>"));
        assert!(html.contains("<title>Códigos postales de &lt;Centro&gt;, A &amp; B | "));
    }
}
