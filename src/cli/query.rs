//! Query command implementation.
//!
//! Prints resolved content as JSON on stdout, so it can be piped into other
//! tools. Diagnostics stay on the verbose log.

use anyhow::{Result, bail};
use serde::Serialize;
use serde_json::{Value as JsonValue, json};

use super::common::Site;
use crate::cli::{QueryArgs, QueryTarget};
use crate::config::SiteConfig;
use crate::debug;
use crate::page::{Composer, NOT_FOUND_FILE, Resolution};
use crate::seo::{knowledge, schema::JsonLd};
use crate::work::CaseStudySource;

/// One row of `folio query routes`.
#[derive(Debug, Serialize)]
struct RouteEntry {
    path: String,
    output: String,
    kind: &'static str,
}

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let site = Site::load(config)?;
    let composer = site.composer();

    let value = match args.target {
        QueryTarget::Work => query_work(&site, args.subject.as_deref())?,
        QueryTarget::Keywords => query_keywords(&site, &composer),
        QueryTarget::Schema => query_schema(&composer, args.subject.as_deref().unwrap_or("/"))?,
        QueryTarget::Routes => query_routes(&composer)?,
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{formatted}");
    Ok(())
}

/// Every case study without bodies, or one full record.
fn query_work(site: &Site, identifier: Option<&str>) -> Result<JsonValue> {
    match identifier {
        None => {
            let studies = site.studies.list_all()?;
            debug!("query"; "{} case studies", studies.len());
            Ok(serde_json::to_value(studies)?)
        }
        Some(id) => match site.studies.get(id)? {
            Some(study) => Ok(serde_json::to_value(study)?),
            None => bail!("no case study with id '{id}'"),
        },
    }
}

fn query_keywords(site: &Site, composer: &Composer) -> JsonValue {
    json!({
        "keywords": composer.keywords(),
        "knowledge": knowledge(&site.store.skills),
    })
}

/// JSON-LD fragments of the page at `path`, `@context` included.
fn query_schema(composer: &Composer, path: &str) -> Result<JsonValue> {
    let doc = match composer.resolve_path(path)? {
        Resolution::Found(doc) => doc,
        Resolution::NotFound => bail!("no page at '{path}'"),
    };
    let fragments = doc
        .structured
        .iter()
        .map(|data| serde_json::to_value(JsonLd::new(data)))
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(JsonValue::Array(fragments))
}

fn query_routes(composer: &Composer) -> Result<JsonValue> {
    let mut entries: Vec<RouteEntry> = composer
        .routes()?
        .iter()
        .map(|route| RouteEntry {
            path: route.path(),
            output: route.output_file().to_string_lossy().replace('\\', "/"),
            kind: route.kind(),
        })
        .collect();
    entries.push(RouteEntry {
        path: "/404".into(),
        output: NOT_FOUND_FILE.into(),
        kind: "not-found",
    });
    Ok(serde_json::to_value(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn site(root: &Path) -> Site {
        let work = root.join("content/work");
        fs::create_dir_all(&work).unwrap();
        fs::write(
            root.join("content/profile.json"),
            r#"{"name":"Ada","title":"Fractional CTO"}"#,
        )
        .unwrap();
        fs::write(
            root.join("content/skills.json"),
            r#"{"keywords":["AI Strategy"],"core":[{"name":"Platform Architecture","tools":["Kubernetes"]}]}"#,
        )
        .unwrap();
        fs::write(
            work.join("hiring.mdx"),
            "---\ntitle: Hiring\ntimeframe: 2023\n---\nBody text\n",
        )
        .unwrap();
        fs::write(work.join("older.md"), "---\ntitle: Older\ntimeframe: 2019\n---\n").unwrap();

        let mut config = SiteConfig::default();
        config.root = root.to_path_buf();
        config.build.content = root.join("content");
        config.build.output = root.join("public");
        Site::load(&config).unwrap()
    }

    #[test]
    fn test_query_work_list_and_single() {
        let dir = TempDir::new().unwrap();
        let site = site(dir.path());

        let list = query_work(&site, None).unwrap();
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["slug"], "hiring");
        assert!(list[0].get("body").is_none());

        let one = query_work(&site, Some("hiring")).unwrap();
        assert_eq!(one["body"], "Body text\n");

        assert!(query_work(&site, Some("missing")).is_err());
    }

    #[test]
    fn test_query_keywords() {
        let dir = TempDir::new().unwrap();
        let site = site(dir.path());
        let value = query_keywords(&site, &site.composer());
        let keywords = value["keywords"].as_str().unwrap();
        assert!(keywords.contains("AI Strategy"));
        assert!(
            value["knowledge"]
                .as_array()
                .unwrap()
                .iter()
                .any(|k| k == "Kubernetes")
        );
    }

    #[test]
    fn test_query_schema() {
        let dir = TempDir::new().unwrap();
        let site = site(dir.path());
        let composer = site.composer();

        let home = query_schema(&composer, "/").unwrap();
        let home = home.as_array().unwrap();
        assert_eq!(home[0]["@context"], "https://schema.org");
        assert_eq!(home[0]["@type"], "Person");
        assert_eq!(home[1]["@type"], "WebSite");

        let detail = query_schema(&composer, "/work/hiring").unwrap();
        assert!(detail.as_array().unwrap().iter().any(|d| d["@type"] == "Article"));

        assert!(query_schema(&composer, "/work/missing").is_err());
        assert!(query_schema(&composer, "/blog").is_err());
    }

    #[test]
    fn test_query_routes() {
        let dir = TempDir::new().unwrap();
        let site = site(dir.path());
        let routes = query_routes(&site.composer()).unwrap();
        let routes = routes.as_array().unwrap();
        // six fixed pages, two case studies, the not-found page
        assert_eq!(routes.len(), 9);
        assert_eq!(routes[0]["path"], "/");
        assert_eq!(routes[0]["output"], "index.html");
        assert_eq!(routes[6]["path"], "/work/hiring");
        assert_eq!(routes[6]["output"], "work/hiring/index.html");
        assert_eq!(routes[6]["kind"], "work");
        assert_eq!(routes[8]["output"], "404.html");
    }
}
