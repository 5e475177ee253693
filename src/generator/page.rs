//! Page enumeration for the province → canton → district hierarchy.
//!
//! Every page is keyed by its [`UrlPath`]. A name that slugifies to nothing
//! yields a URL with an empty segment; such pages are skipped. Two pages
//! claiming the same URL keep the first one and record a [`UrlConflict`].

use rustc_hash::FxHashMap;

use crate::data::{PostalCodeEntry, PostalCodes};
use crate::log;
use crate::route::{UrlPath, canton_url, district_url, province_url};
use crate::utils::plural_s;

/// What a page shows.
#[derive(Debug)]
pub enum PageKind<'a> {
    Home {
        provinces: Vec<&'a str>,
    },
    Province {
        province: &'a str,
        cantons: Vec<&'a str>,
        districts: Vec<&'a PostalCodeEntry>,
    },
    Canton {
        province: &'a str,
        canton: &'a str,
        districts: Vec<&'a PostalCodeEntry>,
    },
    District {
        entry: &'a PostalCodeEntry,
    },
}

impl PageKind<'_> {
    /// Counter name for build progress.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home { .. } => "home",
            Self::Province { .. } => "province",
            Self::Canton { .. } => "canton",
            Self::District { .. } => "district",
        }
    }

    /// Short label used in breadcrumbs and conflict reports.
    pub fn label(&self) -> &str {
        match self {
            Self::Home { .. } => "Inicio",
            Self::Province { province, .. } => *province,
            Self::Canton { canton, .. } => *canton,
            Self::District { entry } => entry.district.as_str(),
        }
    }
}

#[derive(Debug)]
pub struct Page<'a> {
    pub url: UrlPath,
    pub kind: PageKind<'a>,
}

/// A page dropped because its URL was already taken.
#[derive(Debug, Clone)]
pub struct UrlConflict {
    pub url: UrlPath,
    /// Label of the page that kept the URL.
    pub kept: String,
    /// Label of the page that was dropped.
    pub dropped: String,
}

/// A page dropped because a name has no URL-safe characters.
#[derive(Debug, Clone)]
pub struct SkippedPage {
    pub label: String,
    pub url: String,
}

/// All pages of the site plus what was left out.
#[derive(Debug, Default)]
pub struct SitePages<'a> {
    pages: Vec<Page<'a>>,
    by_url: FxHashMap<UrlPath, usize>,
    pub conflicts: Vec<UrlConflict>,
    pub skipped: Vec<SkippedPage>,
}

impl<'a> SitePages<'a> {
    /// Walk the dataset in listing order: home, then each province followed by
    /// its cantons and their districts.
    pub fn collect(data: &'a PostalCodes) -> Self {
        let mut site = Self::default();

        site.push(
            "/".to_string(),
            PageKind::Home {
                provinces: data.provinces(),
            },
        );

        for province in data.provinces() {
            let cantons = data.cantons_by_province(province);
            site.push(
                province_url(province),
                PageKind::Province {
                    province,
                    cantons: cantons.clone(),
                    districts: data.districts_by_province(province),
                },
            );

            for canton in cantons {
                let districts = data.districts_by_canton(province, canton);
                for &entry in &districts {
                    site.push(
                        district_url(&entry.province, &entry.canton, &entry.district),
                        PageKind::District { entry },
                    );
                }
                site.push(
                    canton_url(province, canton),
                    PageKind::Canton {
                        province,
                        canton,
                        districts,
                    },
                );
            }
        }

        site
    }

    fn push(&mut self, url: String, kind: PageKind<'a>) {
        let path = UrlPath::from_page(&url);
        if path.has_empty_segment() {
            self.skipped.push(SkippedPage {
                label: kind.label().to_string(),
                url,
            });
            return;
        }

        if let Some(&index) = self.by_url.get(&path) {
            // Exact duplicate records map to the same page; nothing to report.
            if let (PageKind::District { entry: kept }, PageKind::District { entry }) =
                (&self.pages[index].kind, &kind)
                && kept == entry
            {
                return;
            }
            self.conflicts.push(UrlConflict {
                url: path,
                kept: self.pages[index].kind.label().to_string(),
                dropped: kind.label().to_string(),
            });
            return;
        }

        self.by_url.insert(path.clone(), self.pages.len());
        self.pages.push(Page { url: path, kind });
    }

    pub fn pages(&self) -> &[Page<'a>] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, url: &UrlPath) -> Option<&Page<'a>> {
        self.by_url.get(url).map(|&i| &self.pages[i])
    }

    /// Page counts per kind, in the order they first appear.
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for page in &self.pages {
            let name = page.kind.name();
            match counts.iter_mut().find(|(n, _)| *n == name) {
                Some((_, count)) => *count += 1,
                None => counts.push((name, 1)),
            }
        }
        counts
    }

    /// Ancestors of `page` that exist as pages, root first.
    pub fn breadcrumbs(&self, page: &Page<'a>) -> Vec<&Page<'a>> {
        let mut crumbs = Vec::new();
        let mut current = page.url.parent();
        while let Some(url) = current {
            if let Some(parent) = self.get(&url) {
                crumbs.push(parent);
            }
            current = url.parent();
        }
        crumbs.reverse();
        crumbs
    }

    /// Log skipped pages and URL conflicts.
    pub fn report(&self) {
        for skipped in &self.skipped {
            log!("warning"; "skipped `{}`: no url-safe characters ({})", skipped.label, skipped.url);
        }

        if self.conflicts.is_empty() {
            return;
        }
        log!("conflict"; "{} url conflict{}, keeping the first page",
            self.conflicts.len(), plural_s(self.conflicts.len()));
        for conflict in &self.conflicts {
            eprintln!("  {} `{}` (dropped `{}`)", conflict.url, conflict.kept, conflict.dropped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_dataset;

    #[test]
    fn test_collect_page_counts() {
        let data = test_dataset();
        let site = SitePages::collect(&data);
        // 1 home, 3 provinces, 5 cantons, 9 unique districts
        assert_eq!(
            site.counts(),
            vec![("home", 1), ("province", 3), ("district", 9), ("canton", 5)]
        );
        assert_eq!(site.len(), 18);
        assert!(site.conflicts.is_empty());
        assert!(site.skipped.is_empty());
    }

    #[test]
    fn test_collect_urls() {
        let data = test_dataset();
        let site = SitePages::collect(&data);
        let page = site
            .get(&UrlPath::from_page("/codigo-postal/limon/pococi/guapiles/"))
            .unwrap();
        assert!(matches!(&page.kind, PageKind::District { entry } if entry.postal_code == "70201"));
        assert!(site.get(&UrlPath::from_page("/codigo-postal/san-jose/escazu/")).is_some());
    }

    #[test]
    fn test_empty_slug_skipped() {
        let data = PostalCodes::from(vec![PostalCodeEntry::new("¿?", "Centro", "Centro", "99999")]);
        let site = SitePages::collect(&data);
        // Province, canton and district URLs all contain the empty province segment.
        assert_eq!(site.len(), 1);
        assert_eq!(site.skipped.len(), 3);
        assert_eq!(site.skipped[0].url, "/codigo-postal//");
    }

    #[test]
    fn test_conflict_keeps_first() {
        let data = PostalCodes::from(vec![
            PostalCodeEntry::new("Cartago", "Paraíso", "Orosi", "30205"),
            PostalCodeEntry::new("Cartago", "Paraíso", "Orosí", "30299"),
        ]);
        let site = SitePages::collect(&data);
        assert_eq!(site.conflicts.len(), 1);

        let conflict = &site.conflicts[0];
        assert_eq!(conflict.url, "/codigo-postal/cartago/paraiso/orosi/");
        assert_eq!(conflict.kept, "Orosi");
        assert_eq!(conflict.dropped, "Orosí");
    }

    #[test]
    fn test_breadcrumbs() {
        let data = test_dataset();
        let site = SitePages::collect(&data);
        let page = site
            .get(&UrlPath::from_page("/codigo-postal/san-jose/escazu/san-rafael/"))
            .unwrap();
        let labels: Vec<_> = site
            .breadcrumbs(page)
            .iter()
            .map(|p| p.kind.label())
            .collect();
        assert_eq!(labels, ["Inicio", "San José", "Escazú"]);
    }
}
