//! Route to page composition.
//!
//! The composer holds everything that does not change between pages (the
//! keyword string, the site-wide structured data, the component registries)
//! and builds one [`PageDocument`] per route. Composition has no side
//! effects, so routes can be composed in parallel.

use anyhow::{Context, Result};

use super::document::{PageDocument, Resolution};
use super::route::Route;
use super::sections;
use super::settings::SiteSettings;
use crate::content::ContentStore;
use crate::debug;
use crate::embed::analytics;
use crate::embed::page::{LAYOUT_HTML, LayoutVars};
use crate::render::Registry;
use crate::seo::{self, OgDefaults, PageMeta, StructuredData, schema};
use crate::work::{CaseStudySource, is_valid_identifier};

pub struct Composer<'a> {
    store: &'a ContentStore,
    studies: &'a dyn CaseStudySource,
    settings: &'a SiteSettings,
    keywords: String,
    /// Person and WebSite, carried by every page.
    site_data: [StructuredData; 2],
    case_study: Registry,
    sections: Registry,
}

impl<'a> Composer<'a> {
    pub fn new(
        store: &'a ContentStore,
        studies: &'a dyn CaseStudySource,
        settings: &'a SiteSettings,
    ) -> Self {
        let base_url = settings.base_url.as_str();
        Self {
            store,
            studies,
            settings,
            keywords: seo::keywords(&store.skills, &settings.brand_terms),
            site_data: [
                schema::person(&store.profile, &store.skills, base_url),
                schema::website(&store.profile, base_url),
            ],
            case_study: Registry::case_study(),
            sections: Registry::sections(),
        }
    }

    /// The `keywords` meta value shared by every page.
    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    /// Every route to build: the fixed pages, then one per case study.
    pub fn routes(&self) -> Result<Vec<Route>> {
        let studies = self
            .studies
            .list_all()
            .context("Failed to list case studies")?;

        let mut routes = Route::fixed().to_vec();
        for study in studies {
            if is_valid_identifier(&study.identifier) {
                routes.push(Route::WorkDetail(study.identifier));
            } else {
                debug!("compose"; "skipping case study with unroutable id {:?}", study.identifier);
            }
        }
        Ok(routes)
    }

    /// Resolve a URL path. Unknown paths are [`Resolution::NotFound`].
    pub fn resolve_path(&self, path: &str) -> Result<Resolution> {
        match Route::parse(path) {
            Some(route) => self.resolve(&route),
            None => Ok(Resolution::NotFound),
        }
    }

    /// Compose the page for `route`.
    ///
    /// Only a work detail route whose case study does not exist resolves to
    /// [`Resolution::NotFound`]; storage failures are errors.
    pub fn resolve(&self, route: &Route) -> Result<Resolution> {
        let doc = match route {
            Route::Home => self.home(),
            Route::WorkIndex => self.work_index()?,
            Route::WorkDetail(id) => match self.work_detail(id)? {
                Some(doc) => doc,
                None => return Ok(Resolution::NotFound),
            },
            Route::Services => self.services(),
            Route::Skills => self.skills(),
            Route::About => self.about(),
            Route::Contact => self.contact(),
        };
        Ok(Resolution::Found(doc))
    }

    /// The page written to `404.html`.
    pub fn not_found(&self) -> PageDocument {
        self.document(
            PageMeta::new(
                self.titled("Page Not Found"),
                "The page you're looking for doesn't exist or has been moved.",
                "/404",
            )
            .noindex(),
            "Page Not Found",
            sections::not_found(),
        )
    }

    /// Wrap a document in the site layout.
    pub fn render(&self, doc: &PageDocument) -> Result<String> {
        let settings = self.settings;
        let profile = &self.store.profile;

        let defaults = OgDefaults::new(&profile.name, &settings.base_url, &settings.locale)
            .with_image(settings.og_image.as_deref());
        let mut head = doc.meta.head_tags(&defaults, &self.keywords);
        for data in &doc.structured {
            let script = data.to_script().with_context(|| {
                format!("Failed to serialize {} for {}", data.type_name(), doc.meta.path)
            })?;
            head.push_str(&script);
            head.push('\n');
        }

        let vars = LayoutVars {
            lang: settings.language.clone(),
            theme_color: settings.theme_color.clone(),
            head,
            analytics_head: analytics::head(&settings.analytics),
            analytics_body: analytics::body(&settings.analytics),
            header: sections::header(profile, &settings.scheduling_url),
            main: doc.main.clone(),
            footer: sections::footer(profile, &settings.scheduling_url),
        };
        Ok(LAYOUT_HTML.render(&vars))
    }

    // ========================================================================
    // pages
    // ========================================================================

    fn home(&self) -> PageDocument {
        let profile = &self.store.profile;
        let title = match profile.headline() {
            headline if headline.is_empty() => "Portfolio".to_string(),
            headline => headline,
        };
        let heading = if profile.hero_headline.is_empty() {
            title.clone()
        } else {
            profile.hero_headline.clone()
        };
        let mut doc = self.document(
            PageMeta::new(title, &profile.summary, "/"),
            &heading,
            sections::home(self.store, &self.settings.scheduling_url),
        );
        doc.structured.extend(
            self.store
                .books
                .iter()
                .map(|book| schema::book(book, profile)),
        );
        doc.structured.extend(
            self.store
                .research
                .iter()
                .map(|item| schema::scholarly_article(item, profile)),
        );
        doc
    }

    fn work_index(&self) -> Result<PageDocument> {
        let studies = self
            .studies
            .list_all()
            .context("Failed to list case studies")?;
        Ok(self.document(
            PageMeta::new(
                self.titled("Case Studies"),
                self.described("Case studies and measurable outcomes"),
                "/work",
            ),
            "Case Studies",
            sections::work_index(&studies),
        ))
    }

    fn work_detail(&self, id: &str) -> Result<Option<PageDocument>> {
        let Some(study) = self
            .studies
            .get(id)
            .with_context(|| format!("Failed to load case study '{id}'"))?
        else {
            return Ok(None);
        };

        let body = self
            .case_study
            .render(study.body.as_deref().unwrap_or_default());
        let route = Route::WorkDetail(study.identifier.clone());
        let path = route.path();
        let description = if study.summary.is_empty() {
            self.described(&study.title)
        } else {
            study.summary.clone()
        };

        let mut doc = self.document(
            PageMeta::new(self.titled(&study.title), description, path.as_str())
                .article(study.title.as_str()),
            &study.title,
            sections::work_detail(&study, &body),
        );
        doc.structured.push(schema::breadcrumbs_for(
            &self.settings.base_url,
            &[
                ("Home", "/"),
                ("Work", "/work"),
                (study.title.as_str(), path.as_str()),
            ],
        ));
        doc.structured
            .push(schema::article(&study, &self.store.profile));
        Ok(Some(doc))
    }

    fn services(&self) -> PageDocument {
        let mut doc = self.document(
            PageMeta::new(
                self.titled("Services"),
                self.described("Fractional CTO, AI platform and architecture services"),
                "/services",
            ),
            "Services",
            sections::services(self.store),
        );
        doc.structured.push(schema::breadcrumbs_for(
            &self.settings.base_url,
            &[("Home", "/"), ("Services", "/services")],
        ));
        doc.structured
            .push(schema::services(&self.store.skills, &self.store.profile));
        doc
    }

    fn skills(&self) -> PageDocument {
        let narrative = self
            .store
            .skills_narrative
            .as_deref()
            .map(|body| self.sections.render(body));
        self.document(
            PageMeta::new(
                self.titled("Skills & Expertise"),
                self.described("Skills, tools and expertise"),
                "/skills",
            ),
            "Skills & Expertise",
            sections::skills(self.store, narrative.as_deref()),
        )
    }

    fn about(&self) -> PageDocument {
        let narrative = self
            .store
            .about_narrative
            .as_deref()
            .map(|body| self.sections.render(body));
        let profile = &self.store.profile;
        let description = if profile.summary.is_empty() {
            self.described("About")
        } else {
            profile.summary.clone()
        };
        self.document(
            PageMeta::new(self.titled("About"), description, "/about"),
            "About",
            sections::about(profile, narrative.as_deref()),
        )
    }

    fn contact(&self) -> PageDocument {
        self.document(
            PageMeta::new(
                self.titled("Contact"),
                self.described("Book a discovery call or get in touch"),
                "/contact",
            ),
            "Get In Touch",
            sections::contact(self.store, &self.settings.scheduling_url),
        )
    }

    // ========================================================================
    // helpers
    // ========================================================================

    fn document(&self, meta: PageMeta, heading: &str, main: String) -> PageDocument {
        PageDocument {
            meta,
            structured: self.site_data.to_vec(),
            heading: heading.to_string(),
            main,
        }
    }

    /// `"{page} - {name}"`, or just the page name without a profile name.
    fn titled(&self, page: &str) -> String {
        match self.store.profile.name.as_str() {
            "" => page.to_string(),
            name => format!("{page} - {name}"),
        }
    }

    /// `"{lead} from {name}."`, or `"{lead}."` without a profile name.
    fn described(&self, lead: &str) -> String {
        match self.store.profile.name.as_str() {
            "" => format!("{lead}."),
            name => format!("{lead} from {name}."),
        }
    }
}
