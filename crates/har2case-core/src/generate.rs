//! Test case generation: HAR in, source file out

use std::path::{Path, PathBuf};

use crate::{
    builders::CaseContext,
    config::Config,
    error::{Error, Result},
    extract::extract_entries,
    har::HarContext,
    templates::{EntryMode, TemplateKind, TemplateManager},
};

/// Main entry point for test case generation.
///
/// Returns the path of the written file.
pub async fn generate(config: &Config) -> Result<PathBuf> {
    let har_path = Path::new(&config.har_path);

    // 1. Initialize the template manager
    if config.template_kind == TemplateKind::Seldom {
        if let Some(template) = &config.template_path {
            log::warn!(
                "Ignoring template {}: only the custom template kind reads a template file",
                template
            );
        }
    }
    let template_manager =
        TemplateManager::new(config.template_kind, config.template_path()).await?;

    // 2. Resolve the destination
    let output_path = match &config.output_path {
        Some(path) => PathBuf::from(path),
        None => output_path_for(har_path, &template_manager.output_extension())?,
    };
    log::info!("{}", output_path.display());

    // 3. Render and write
    log::info!("Start to generate testcase.");
    let testcase = make_testcase(har_path, &template_manager, config.entry_mode).await?;
    write_testcase(&output_path, &testcase).await?;

    Ok(output_path)
}

/// Render the test case source for a HAR file.
///
/// Every entry is extracted, so an unsupported method anywhere in the capture
/// fails the run. In [`EntryMode::Last`] the built-in template renders only
/// the final entry; custom templates also receive every entry under `cases`.
pub async fn make_testcase(
    har_path: &Path,
    template_manager: &TemplateManager,
    mode: EntryMode,
) -> Result<String> {
    let har = HarContext::from_file(har_path).await?;
    let extracted = extract_entries(har.entries())?;

    if extracted.is_empty() {
        return Err(Error::EmptyHar(har_path.to_path_buf()));
    }
    log::debug!(
        "Rendering {} entries from {} in {} mode",
        extracted.len(),
        har_path.display(),
        mode
    );

    let cases =
        CaseContext::transform_entries(template_manager.template_kind(), &extracted, mode)?;
    template_manager.render(&cases, mode)
}

/// Sibling of the HAR file with its extension replaced by `extension`.
pub fn output_path_for(har_path: &Path, extension: &str) -> Result<PathBuf> {
    let absolute = std::path::absolute(har_path)?;
    Ok(absolute.with_extension(extension))
}

/// Create or truncate `path` and write the test case into it.
pub async fn write_testcase(path: &Path, content: &str) -> Result<()> {
    log::info!("Writing test case to {}", path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, content).await?;

    log::info!("created file: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn write_har(dir: &Path, name: &str, entries: serde_json::Value) -> PathBuf {
        let path = dir.join(name);
        let har = json!({"log": {"version": "1.2", "entries": entries}});
        std::fs::write(&path, har.to_string()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_generate_single_get() -> Result<()> {
        let dir = tempdir()?;
        let har_path = write_har(
            dir.path(),
            "items.har",
            json!([{
                "request": {
                    "url": "https://api.example.com/items?x=1",
                    "method": "GET",
                    "headers": [],
                    "cookies": [],
                    "queryString": []
                },
                "response": {"status": 200}
            }]),
        );

        let config = Config::new(har_path.to_string_lossy());
        let written = generate(&config).await?;
        assert_eq!(written, dir.path().join("items.py"));

        let content = std::fs::read_to_string(&written)?;
        assert!(content.contains(r#"self.url = "https://api.example.com/items""#));
        assert!(content.contains("self.get(self.url, params={}, headers={}, cookies={})"));
        assert!(content.contains("self.assertStatusCode(200)"));
        Ok(())
    }

    #[tokio::test]
    async fn test_last_entry_wins() -> Result<()> {
        let dir = tempdir()?;
        let har_path = write_har(
            dir.path(),
            "flow.har",
            json!([
                {"request": {"url": "http://x/first", "method": "GET"}, "response": {"status": 200}},
                {"request": {"url": "http://x/second", "method": "DELETE"}, "response": {"status": 204}}
            ]),
        );

        let manager = TemplateManager::new(TemplateKind::Seldom, None).await?;
        let content = make_testcase(&har_path, &manager, EntryMode::Last).await?;
        assert!(content.contains(r#"self.url = "http://x/second""#));
        assert!(content.contains("self.delete(self.url, json={}, headers={}, cookies={})"));
        assert!(content.contains("def test_case(self):"));
        assert!(!content.contains("http://x/first"));
        Ok(())
    }

    #[tokio::test]
    async fn test_all_entries_mode() -> Result<()> {
        let dir = tempdir()?;
        let har_path = write_har(
            dir.path(),
            "flow.har",
            json!([
                {"request": {"url": "http://x/first", "method": "GET"}, "response": {"status": 200}},
                {"request": {"url": "http://x/second", "method": "DELETE"}, "response": {"status": 204}}
            ]),
        );

        let mut config = Config::new(har_path.to_string_lossy());
        config.entry_mode = EntryMode::All;
        let written = generate(&config).await?;

        let content = std::fs::read_to_string(&written)?;
        assert!(content.contains("def test_case_1(self):"));
        assert!(content.contains("def test_case_2(self):"));
        assert!(content.contains(r#"self.url = "http://x/first""#));
        assert!(content.contains("self.assertStatusCode(204)"));
        Ok(())
    }

    #[tokio::test]
    async fn test_custom_template_gets_all_entries_in_last_mode() -> Result<()> {
        let dir = tempdir()?;
        let har_path = write_har(
            dir.path(),
            "flow.har",
            json!([
                {"request": {"url": "http://x/first", "method": "GET"}, "response": {"status": 200}},
                {"request": {"url": "http://x/second", "method": "DELETE"}, "response": {"status": 204}}
            ]),
        );
        let template = dir.path().join("count.txt.tera");
        std::fs::write(
            &template,
            "{{ cases | length }}{% for case in cases %} {{ case.test_name }}={{ case.url }}{% endfor %}",
        )?;

        let manager = TemplateManager::new(TemplateKind::Custom, Some(template)).await?;
        let last = make_testcase(&har_path, &manager, EntryMode::Last).await?;
        assert_eq!(last, "2 case=http://x/first case=http://x/second");

        let all = make_testcase(&har_path, &manager, EntryMode::All).await?;
        assert_eq!(all, "2 case_1=http://x/first case_2=http://x/second");
        Ok(())
    }

    #[tokio::test]
    async fn test_seldom_ignores_template_path() -> Result<()> {
        let dir = tempdir()?;
        let har_path = write_har(
            dir.path(),
            "items.har",
            json!([{"request": {"url": "http://x/a", "method": "GET"}, "response": {"status": 200}}]),
        );

        let mut config = Config::new(har_path.to_string_lossy());
        config.template_path = Some(dir.path().join("missing.py.tera").to_string_lossy().into_owned());
        let written = generate(&config).await?;

        let content = std::fs::read_to_string(&written)?;
        assert!(content.starts_with("import seldom\n"));
        Ok(())
    }

    #[tokio::test]
    async fn test_unsupported_method_writes_nothing() -> Result<()> {
        let dir = tempdir()?;
        let har_path = write_har(
            dir.path(),
            "patch.har",
            json!([
                {"request": {"url": "http://x/a", "method": "patch"}, "response": {"status": 200}},
                {"request": {"url": "http://x/b", "method": "GET"}, "response": {"status": 200}}
            ]),
        );

        let err = generate(&Config::new(har_path.to_string_lossy()))
            .await
            .unwrap_err();
        match err {
            Error::UnsupportedMethod { method } => assert_eq!(method, "patch"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!dir.path().join("patch.py").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_har() -> Result<()> {
        let dir = tempdir()?;
        let har_path = write_har(dir.path(), "empty.har", json!([]));

        let err = generate(&Config::new(har_path.to_string_lossy()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptyHar(_)));
        assert!(!dir.path().join("empty.py").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_output_override_and_truncate() -> Result<()> {
        let dir = tempdir()?;
        let har_path = write_har(
            dir.path(),
            "items.har",
            json!([{"request": {"url": "http://x/a", "method": "GET"}, "response": {"status": 200}}]),
        );
        let output = dir.path().join("generated/test_items.py");
        std::fs::create_dir_all(output.parent().unwrap())?;
        std::fs::write(&output, "stale content that is much longer than nothing\n".repeat(50))?;

        let mut config = Config::new(har_path.to_string_lossy());
        config.output_path = Some(output.to_string_lossy().into_owned());
        let written = generate(&config).await?;

        assert_eq!(written, output);
        let content = std::fs::read_to_string(&output)?;
        assert!(content.starts_with("import seldom\n"));
        assert!(!content.contains("stale content"));
        Ok(())
    }

    #[test]
    fn test_output_path_for() -> Result<()> {
        let path = output_path_for(Path::new("/captures/demo.har"), "py")?;
        assert_eq!(path, PathBuf::from("/captures/demo.py"));

        let relative = output_path_for(Path::new("demo.har"), "py")?;
        assert!(relative.is_absolute());
        assert_eq!(relative.file_name().unwrap(), "demo.py");
        Ok(())
    }
}
