//! End-to-end generation through the real adapters.

use std::{fs, path::Path};

use stencil_adapters::{
    EmbeddedStore, InMemoryStore, LocalFilesystem, MemoryFilesystem, SimpleRenderer,
    builtin_catalog,
};
use stencil_core::{
    application::GenerateService,
    domain::{EntryFailure, RenderContext, RunParameters, TemplateId},
};
use tempfile::TempDir;
use walkdir::WalkDir;

fn widget() -> RunParameters {
    RunParameters::new("Widget", "Widgets as a service", "github.com/acme/widget")
}

fn local_service() -> GenerateService {
    GenerateService::new(
        builtin_catalog().unwrap(),
        Box::new(EmbeddedStore::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

fn memory_service(store: InMemoryStore, fs: MemoryFilesystem) -> GenerateService {
    GenerateService::new(
        builtin_catalog().unwrap(),
        Box::new(store),
        Box::new(SimpleRenderer::new()),
        Box::new(fs),
    )
}

fn generated_files(root: &Path) -> Vec<String> {
    let mut files: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

#[test]
fn widget_project_on_disk() {
    let tmp = TempDir::new().unwrap();
    let report = local_service().generate(&widget(), tmp.path());

    assert!(report.is_clean(), "{:?}", report.failed().collect::<Vec<_>>());
    assert_eq!(report.success_count(), 21);

    let files = generated_files(tmp.path());
    assert_eq!(files.len(), 21);
    assert!(files.contains(&"cmd/Widget/main.go".to_string()));
    assert!(files.contains(&"internal/tests/assert/assert.go".to_string()));
    assert!(files.contains(&".envrc".to_string()));

    let main = fs::read_to_string(tmp.path().join("cmd/Widget/main.go")).unwrap();
    assert!(main.contains("\"github.com/acme/widget/api\""));
    assert!(main.contains("Widgets as a service"));
    assert!(!main.contains("{{"));

    let makefile = fs::read_to_string(tmp.path().join("Makefile")).unwrap();
    assert!(makefile.contains("BINARY := Widget"));
    assert!(makefile.contains("MODULE := github.com/acme/widget"));
}

#[test]
fn no_generated_file_keeps_a_known_token() {
    let tmp = TempDir::new().unwrap();
    local_service().generate(&widget(), tmp.path());

    for file in generated_files(tmp.path()) {
        let text = fs::read_to_string(tmp.path().join(&file)).unwrap();
        for token in ["{{RepoName}}", "{{Description}}", "{{RepoPath}}"] {
            assert!(!text.contains(token), "{file} still has {token}");
        }
    }
}

#[test]
fn every_file_is_its_template_with_tokens_replaced() {
    let tmp = TempDir::new().unwrap();
    local_service().generate(&widget(), tmp.path());

    let store = EmbeddedStore::new();
    let context = RenderContext::new(widget());
    let catalog = builtin_catalog().unwrap();

    for entry in &catalog {
        let path = entry.pattern().resolve(tmp.path(), "Widget");
        let source = store.lookup(entry.template_id().as_str()).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            context.render(source),
            "{} differs from {}",
            path.display(),
            entry.template_id().source_path()
        );
    }
}

#[test]
fn templates_without_tokens_are_copied_verbatim() {
    let tmp = TempDir::new().unwrap();
    local_service().generate(&widget(), tmp.path());

    let written = fs::read_to_string(tmp.path().join("api/errors.go")).unwrap();
    assert_eq!(written, EmbeddedStore::new().lookup("errors.txt").unwrap());
}

#[test]
fn second_run_overwrites_with_identical_content() {
    let tmp = TempDir::new().unwrap();
    let service = local_service();

    service.generate(&widget(), tmp.path());
    let first = fs::read_to_string(tmp.path().join(".envrc")).unwrap();

    fs::write(tmp.path().join(".envrc"), "stale").unwrap();
    let report = service.generate(&widget(), tmp.path());

    assert!(report.is_clean());
    assert_eq!(generated_files(tmp.path()).len(), 21);
    assert_eq!(fs::read_to_string(tmp.path().join(".envrc")).unwrap(), first);
}

#[test]
fn defaults_use_my_project() {
    let tmp = TempDir::new().unwrap();
    let report = local_service().generate(&RunParameters::default(), tmp.path());

    assert!(report.is_clean());
    let env = fs::read_to_string(tmp.path().join(".envrc")).unwrap();
    assert!(env.contains("export MyProject_ADDR"));
    assert!(tmp.path().join("cmd/MyProject/main.go").is_file());
}

#[test]
fn file_in_place_of_directory_skips_only_its_entries() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("server"), "not a directory").unwrap();

    let report = local_service().generate(&widget(), tmp.path());

    assert_eq!(report.failure_count(), 4);
    assert_eq!(report.success_count(), 17);
    for outcome in report.failed() {
        assert!(outcome.entry.pattern().as_str().starts_with("/server/"));
        assert!(matches!(
            outcome.failure(),
            Some(EntryFailure::DirectoryCreation { .. })
        ));
    }
    assert!(tmp.path().join("api/api.go").is_file());
}

#[test]
fn missing_template_skips_one_entry_in_memory() {
    let store = InMemoryStore::with_builtin().unwrap();
    store.remove(&TemplateId::new("validator.txt")).unwrap();
    let fs = MemoryFilesystem::new();

    let report = memory_service(store, fs.clone()).generate(&widget(), ".");

    assert_eq!(report.failure_count(), 1);
    let failure = report.failed().next().unwrap().failure().unwrap();
    assert_eq!(
        failure.to_string(),
        "Failed to read template file templates/validator.txt: Template missing: validator.txt"
    );
    assert_eq!(fs.list_files().len(), 20);
    assert!(fs.read_file(Path::new("./validator/validator.go")).is_none());
}

#[test]
fn memory_run_matches_catalog_order() {
    let fs = MemoryFilesystem::new();
    let service = memory_service(InMemoryStore::with_builtin().unwrap(), fs.clone());

    let mut seen = Vec::new();
    service.generate_with(&widget(), ".", |o| {
        seen.push(o.entry.template_id().to_string());
    });

    let expected: Vec<_> = service
        .catalog()
        .iter()
        .map(|e| e.template_id().to_string())
        .collect();
    assert_eq!(seen, expected);
    assert_eq!(seen.first().map(String::as_str), Some("start.txt"));
    assert_eq!(seen.last().map(String::as_str), Some("env.txt"));
}

#[test]
fn dry_run_plan_touches_nothing() {
    let fs = MemoryFilesystem::new();
    let service = memory_service(InMemoryStore::with_builtin().unwrap(), fs.clone());

    let plan = service.plan(&widget(), ".");

    assert_eq!(plan.len(), 21);
    assert!(plan.iter().all(|p| !p.exists));
    assert!(fs.list_files().is_empty());
}
