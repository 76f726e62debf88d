//! schema.org structured data.
//!
//! Top-level fragments are [`StructuredData`] variants, serialized with a
//! `"@type"` tag and wrapped in [`JsonLd`] for the `"@context"`. Nested
//! objects are [`Node`]s, which add their own `"@type"`. Field names are the
//! schema.org property names.

use serde::{Serialize, Serializer};

use crate::content::{Book as BookEntry, ProfileFacts, Research, SkillSet};
use crate::utils::url::absolute;
use crate::work::CaseStudy;

use super::keywords::knowledge;

pub const CONTEXT: &str = "https://schema.org";

/// A top-level structured-data fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub enum StructuredData {
    Person(Person),
    WebSite(WebSite),
    BreadcrumbList(BreadcrumbList),
    Article(Article),
    Service(Service),
    Book(Book),
    ScholarlyArticle(ScholarlyArticle),
    ItemList(ItemList),
}

impl StructuredData {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Person(_) => Person::TYPE,
            Self::WebSite(_) => WebSite::TYPE,
            Self::BreadcrumbList(_) => BreadcrumbList::TYPE,
            Self::Article(_) => Article::TYPE,
            Self::Service(_) => Service::TYPE,
            Self::Book(_) => Book::TYPE,
            Self::ScholarlyArticle(_) => ScholarlyArticle::TYPE,
            Self::ItemList(_) => ItemList::TYPE,
        }
    }

    pub fn to_json_ld(&self) -> serde_json::Result<String> {
        serde_json::to_string(&JsonLd::new(self))
    }

    /// `<script type="application/ld+json">` element for the page head.
    pub fn to_script(&self) -> serde_json::Result<String> {
        // `</script>` inside a string value would end the element early.
        let json = self.to_json_ld()?.replace("</", "<\\/");
        Ok(format!(r#"<script type="application/ld+json">{json}</script>"#))
    }
}

/// A fragment with its `"@context"`.
#[derive(Debug, Serialize)]
pub struct JsonLd<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(flatten)]
    data: &'a StructuredData,
}

impl<'a> JsonLd<'a> {
    pub fn new(data: &'a StructuredData) -> Self {
        Self {
            context: CONTEXT,
            data,
        }
    }
}

// ============================================================================
// Nested nodes
// ============================================================================

/// A schema.org type name.
pub trait SchemaType {
    const TYPE: &'static str;
}

/// A nested object carrying its own `"@type"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T>(pub T);

impl<T: SchemaType + Serialize> Serialize for Node<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Tagged<'a, U> {
            #[serde(rename = "@type")]
            kind: &'static str,
            #[serde(flatten)]
            inner: &'a U,
        }
        Tagged {
            kind: T::TYPE,
            inner: &self.0,
        }
        .serialize(serializer)
    }
}

macro_rules! schema_types {
    ($($ty:ident),* $(,)?) => {
        $(impl SchemaType for $ty { const TYPE: &'static str = stringify!($ty); })*
    };
}

schema_types!(
    Person, WebSite, BreadcrumbList, Article, Service, Book, ScholarlyArticle, ItemList,
    Occupation, Country, SearchAction, EntryPoint, ListItem, Thing, OfferCatalog, Offer,
);

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knows_about: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_as: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_occupation: Option<Node<Occupation>>,
}

impl Person {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn titled(profile: &ProfileFacts) -> Self {
        Self {
            job_title: non_empty(&profile.title),
            ..Self::named(&profile.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupation {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation_location: Option<Node<Country>>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    pub name: String,
    pub url: String,
    pub description: String,
    pub author: Node<Person>,
    pub potential_action: Node<SearchAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchAction {
    pub target: Node<EntryPoint>,
    #[serde(rename = "query-input")]
    pub query_input: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    pub url_template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    pub item_list_element: Vec<Node<ListItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList {
    pub item_list_element: Vec<Node<ListItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub item: ListEntry,
}

/// A list item is either a URL (breadcrumbs) or an embedded node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListEntry {
    Url(String),
    Service(Box<Node<Service>>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub headline: String,
    pub description: String,
    pub author: Node<Person>,
    pub publisher: Node<Person>,
    pub date_published: String,
    pub about: Vec<Node<Thing>>,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thing {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Node<Person>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_served: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_offer_catalog: Option<Node<OfferCatalog>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCatalog {
    pub name: String,
    pub item_list_element: Vec<Node<Offer>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub item_offered: Node<Service>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub name: String,
    pub description: String,
    pub author: Node<Person>,
    /// The entry's kind (`Book`, `Article`, `Guide`).
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScholarlyArticle {
    pub headline: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub author: Node<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_part_of: Option<Node<Thing>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_created: Option<Node<Thing>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// ============================================================================
// Builders
// ============================================================================

fn non_empty(s: &str) -> Option<String> {
    Some(s.to_string()).filter(|s| !s.is_empty())
}

/// The site owner, with everything they know about.
pub fn person(profile: &ProfileFacts, skills: &SkillSet, base_url: &str) -> StructuredData {
    let occupation = Occupation {
        name: profile.title.clone(),
        occupation_location: non_empty(&profile.country).map(|name| Node(Country { name })),
        skills: skills.core_names().map(str::to_string).collect(),
    };

    StructuredData::Person(Person {
        description: Some(profile.summary.clone()),
        knows_about: Some(knowledge(skills)),
        url: Some(base_url.to_string()),
        same_as: Some(profile.same_as()),
        has_occupation: Some(Node(occupation)),
        job_title: non_empty(&profile.title),
        ..Person::named(&profile.name)
    })
}

/// The site itself, with a sitelinks search action.
pub fn website(profile: &ProfileFacts, base_url: &str) -> StructuredData {
    let base = base_url.trim_end_matches('/');
    StructuredData::WebSite(WebSite {
        name: profile.headline(),
        url: base_url.to_string(),
        description: profile.summary.clone(),
        author: Node(Person::named(&profile.name)),
        potential_action: Node(SearchAction {
            target: Node(EntryPoint {
                url_template: format!("{base}/?q={{search_term_string}}"),
            }),
            query_input: "required name=search_term_string".to_string(),
        }),
    })
}

/// Breadcrumb trail, positions 1-indexed in input order.
pub fn breadcrumbs<N: AsRef<str>, U: AsRef<str>>(items: &[(N, U)]) -> StructuredData {
    StructuredData::BreadcrumbList(BreadcrumbList {
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, (name, url))| {
                Node(ListItem {
                    position: index + 1,
                    name: Some(name.as_ref().to_string()),
                    item: ListEntry::Url(url.as_ref().to_string()),
                })
            })
            .collect(),
    })
}

/// Breadcrumbs from `(name, route path)` pairs, made absolute.
pub fn breadcrumbs_for(base_url: &str, trail: &[(&str, &str)]) -> StructuredData {
    let items: Vec<_> = trail
        .iter()
        .map(|(name, path)| (*name, absolute(base_url, path)))
        .collect();
    breadcrumbs(&items)
}

/// A case study as an article.
pub fn article(study: &CaseStudy, profile: &ProfileFacts) -> StructuredData {
    StructuredData::Article(Article {
        headline: study.title.clone(),
        description: study.summary.clone(),
        author: Node(Person::titled(profile)),
        publisher: Node(Person::named(&profile.name)),
        date_published: study.timeframe.clone(),
        about: study
            .stack
            .iter()
            .map(|name| Node(Thing { name: name.clone() }))
            .collect(),
        keywords: study.stack.join(", "),
    })
}

/// One Service per core skill, offers per outcome.
pub fn service_list(skills: &SkillSet, profile: &ProfileFacts) -> Vec<Service> {
    skills
        .core
        .iter()
        .map(|skill| Service {
            name: skill.name.clone(),
            description: Some(skill.one_liner.clone()),
            provider: Some(Node(Person::titled(profile))),
            service_type: Some(skill.name.clone()),
            area_served: Some("Worldwide".to_string()),
            has_offer_catalog: Some(Node(OfferCatalog {
                name: skill.name.clone(),
                item_list_element: skill
                    .outcomes
                    .iter()
                    .map(|outcome| {
                        Node(Offer {
                            item_offered: Node(Service {
                                name: outcome.clone(),
                                ..Default::default()
                            }),
                        })
                    })
                    .collect(),
            })),
        })
        .collect()
}

/// The services list as an ItemList.
pub fn services(skills: &SkillSet, profile: &ProfileFacts) -> StructuredData {
    StructuredData::ItemList(ItemList {
        item_list_element: service_list(skills, profile)
            .into_iter()
            .enumerate()
            .map(|(index, service)| {
                Node(ListItem {
                    position: index + 1,
                    name: None,
                    item: ListEntry::Service(Box::new(Node(service))),
                })
            })
            .collect(),
    })
}

pub fn book(entry: &BookEntry, profile: &ProfileFacts) -> StructuredData {
    StructuredData::Book(Book {
        name: entry.title.clone(),
        description: entry.blurb.clone(),
        author: Node(Person::named(&profile.name)),
        genre: entry.kind.clone(),
        url: entry.url.clone(),
        date_published: entry.year.clone(),
        keywords: Some(entry.tags.join(", ")).filter(|k| !k.is_empty()),
    })
}

pub fn scholarly_article(item: &Research, profile: &ProfileFacts) -> StructuredData {
    StructuredData::ScholarlyArticle(ScholarlyArticle {
        headline: item.title.clone(),
        summary: item.summary.clone(),
        author: Node(Person::named(&profile.name)),
        is_part_of: item.venue.clone().map(|name| Node(Thing { name })),
        date_published: item.date.clone(),
        location_created: item.location.clone().map(|name| Node(Thing { name })),
        url: item.url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CoreSkill;
    use serde_json::{Value, json};

    fn profile() -> ProfileFacts {
        let mut profile = ProfileFacts {
            name: "Ada".into(),
            title: "CTO & AI Platform Architect".into(),
            summary: "16+ years.".into(),
            country: "India".into(),
            ..Default::default()
        };
        profile
            .social
            .insert("linkedin".into(), "https://linkedin.com/in/ada".into());
        profile
    }

    fn skills() -> SkillSet {
        SkillSet {
            keywords: vec!["CTO".into()],
            core: vec![CoreSkill {
                name: "Fractional CTO".into(),
                one_liner: "Lead engineering.".into(),
                outcomes: vec!["Roadmap".into(), "Hiring".into()],
                tools: vec!["OKRs".into()],
            }],
            ..Default::default()
        }
    }

    fn to_value(data: &StructuredData) -> Value {
        serde_json::from_str(&data.to_json_ld().unwrap()).unwrap()
    }

    #[test]
    fn test_breadcrumb_positions() {
        let data = breadcrumbs(&[("Home", "https://x/"), ("Work", "https://x/work")]);
        let value = to_value(&data);
        assert_eq!(
            value,
            json!({
                "@context": "https://schema.org",
                "@type": "BreadcrumbList",
                "itemListElement": [
                    { "@type": "ListItem", "position": 1, "name": "Home", "item": "https://x/" },
                    { "@type": "ListItem", "position": 2, "name": "Work", "item": "https://x/work" }
                ]
            })
        );
    }

    #[test]
    fn test_breadcrumbs_for_joins_base() {
        let value = to_value(&breadcrumbs_for("https://x.dev/", &[("Home", "/"), ("Work", "/work")]));
        assert_eq!(value["itemListElement"][0]["item"], "https://x.dev");
        assert_eq!(value["itemListElement"][1]["item"], "https://x.dev/work");
    }

    #[test]
    fn test_person_fields() {
        let value = to_value(&person(&profile(), &skills(), "https://x.dev"));
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["jobTitle"], "CTO & AI Platform Architect");
        assert_eq!(value["knowsAbout"], json!(["CTO", "Fractional CTO", "OKRs"]));
        assert_eq!(value["sameAs"], json!(["https://linkedin.com/in/ada"]));
        assert_eq!(value["hasOccupation"]["@type"], "Occupation");
        assert_eq!(value["hasOccupation"]["skills"], json!(["Fractional CTO"]));
        assert_eq!(value["hasOccupation"]["occupationLocation"]["@type"], "Country");
        assert_eq!(value["hasOccupation"]["occupationLocation"]["name"], "India");
    }

    #[test]
    fn test_person_without_country() {
        let profile = ProfileFacts::default();
        let value = to_value(&person(&profile, &SkillSet::default(), "https://x.dev"));
        assert!(value["hasOccupation"].get("occupationLocation").is_none());
        assert_eq!(value["knowsAbout"], json!([]));
        assert!(value.get("jobTitle").is_none());
    }

    #[test]
    fn test_website_search_action() {
        let value = to_value(&website(&profile(), "https://x.dev/"));
        assert_eq!(value["name"], "Ada - CTO & AI Platform Architect");
        assert_eq!(value["author"], json!({ "@type": "Person", "name": "Ada" }));
        let action = &value["potentialAction"];
        assert_eq!(action["@type"], "SearchAction");
        assert_eq!(action["target"]["@type"], "EntryPoint");
        assert_eq!(action["target"]["urlTemplate"], "https://x.dev/?q={search_term_string}");
        assert_eq!(action["query-input"], "required name=search_term_string");
    }

    #[test]
    fn test_article_from_case_study() {
        let study = CaseStudy {
            title: "Hiring".into(),
            summary: "Rebuilt hiring.".into(),
            timeframe: "2023".into(),
            stack: vec!["Rust".into(), "Postgres".into()],
            ..Default::default()
        };
        let value = to_value(&article(&study, &profile()));
        assert_eq!(value["headline"], "Hiring");
        assert_eq!(value["datePublished"], "2023");
        assert_eq!(value["keywords"], "Rust, Postgres");
        assert_eq!(value["about"][1], json!({ "@type": "Thing", "name": "Postgres" }));
        assert_eq!(value["author"]["jobTitle"], "CTO & AI Platform Architect");
        assert!(value["publisher"].get("jobTitle").is_none());
    }

    #[test]
    fn test_services_item_list() {
        let value = to_value(&services(&skills(), &profile()));
        assert_eq!(value["@type"], "ItemList");
        let item = &value["itemListElement"][0];
        assert_eq!(item["position"], 1);
        assert!(item.get("name").is_none());
        let service = &item["item"];
        assert_eq!(service["@type"], "Service");
        assert_eq!(service["description"], "Lead engineering.");
        assert_eq!(service["areaServed"], "Worldwide");
        assert_eq!(service["provider"]["@type"], "Person");
        let offers = &service["hasOfferCatalog"]["itemListElement"];
        assert_eq!(
            offers[1],
            json!({ "@type": "Offer", "itemOffered": { "@type": "Service", "name": "Hiring" } })
        );
    }

    #[test]
    fn test_book_and_paper() {
        let entry = BookEntry {
            title: "Platforms".into(),
            kind: "Book".into(),
            tags: vec!["AI".into()],
            ..Default::default()
        };
        let value = to_value(&book(&entry, &profile()));
        assert_eq!(value["@type"], "Book");
        assert_eq!(value["keywords"], "AI");
        assert!(value.get("url").is_none());

        let paper = Research {
            title: "Agents".into(),
            summary: "We study agents.".into(),
            venue: Some("NeurIPS".into()),
            ..Default::default()
        };
        let value = to_value(&scholarly_article(&paper, &profile()));
        assert_eq!(value["@type"], "ScholarlyArticle");
        assert_eq!(value["abstract"], "We study agents.");
        assert_eq!(value["isPartOf"]["name"], "NeurIPS");
    }

    #[test]
    fn test_context_first_and_script_escaping() {
        let study = CaseStudy {
            title: "</script><b>".into(),
            ..Default::default()
        };
        let data = article(&study, &profile());
        assert!(data.to_json_ld().unwrap().starts_with(r#"{"@context":"https://schema.org","@type":"Article""#));
        let script = data.to_script().unwrap();
        assert!(!script.contains("</script><b>"));
        assert!(script.ends_with("</script>"));
        assert_eq!(data.type_name(), "Article");
    }
}
