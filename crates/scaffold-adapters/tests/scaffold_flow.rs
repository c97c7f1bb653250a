//! End-to-end scaffold runs against the in-memory and local filesystems.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use scaffold_adapters::{JsonDocumentPatcher, LocalFilesystem, MemoryFilesystem};
use scaffold_core::{
    application::{
        ApplicationError, Registration, RegistrationError, ScaffoldService,
        ports::{Filesystem, WorkspaceRegistrar},
    },
    domain::{ExclusionSet, ScaffoldRequest, WorkspaceLayout},
    error::ScaffoldError,
};
use serde_json::Value;
use tempfile::TempDir;

/// Records every registration; optionally fails them all.
#[derive(Clone, Default)]
struct FakeRegistrar {
    calls: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
    fail: bool,
}

impl FakeRegistrar {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl WorkspaceRegistrar for FakeRegistrar {
    fn register(&self, root: &Path, member: &Path) -> Result<(), RegistrationError> {
        self.calls
            .lock()
            .unwrap()
            .push((root.to_path_buf(), member.to_path_buf()));
        if self.fail {
            return Err(RegistrationError::ToolNotFound {
                program: "go".into(),
            });
        }
        Ok(())
    }

    fn manual_command(&self, member: &Path) -> String {
        format!("go work use ./{}", member.display())
    }
}

const TEMPLATE_GO_MOD: &str = "module example.com/project-go/apps/desktop\n\ngo 1.25\n\nrequire example.com/project-go/libs/shared v0.0.0\n\nreplace example.com/project-go/libs/shared => ../../libs/shared\n";
const TEMPLATE_MAIN: &str = "package main\n\nimport \"example.com/project-go/libs/shared\"\n\nconst title = \"Project Go\"\nconst slug = \"project-go\"\n\nfunc main() { shared.Run(title, slug) }\n";
const TEMPLATE_APP: &str = "package main\n\nimport \"example.com/project-go/libs/shared\"\n\nvar _ = shared.Run\n";
const TEMPLATE_WAILS: &str = r#"{"name":"project-go","outputfilename":"project-go","info":{"productName":"Project Go","companyName":"Template","productVersion":"1.0.0"},"frontend:install":"npm install"}"#;
const TEMPLATE_PACKAGE: &str = r#"{"name":"project-go-frontend","private":true,"version":"0.0.0"}"#;
const TEMPLATE_INDEX: &str = "<title>Project Go</title>\n";
const TEMPLATE_MAIN_JS: &str = "document.title = 'Project Go';\n";
const FRONTEND_GO: &str = "package wailsjs // example.com/project-go\n";

fn template_files() -> Vec<(&'static str, &'static str)> {
    vec![
        ("go.work", "go 1.25\n\nuse ./apps/desktop\n"),
        ("apps/desktop/go.mod", TEMPLATE_GO_MOD),
        ("apps/desktop/main.go", TEMPLATE_MAIN),
        ("apps/desktop/internal/app.go", TEMPLATE_APP),
        ("apps/desktop/wails.json", TEMPLATE_WAILS),
        ("apps/desktop/frontend/package.json", TEMPLATE_PACKAGE),
        ("apps/desktop/frontend/index.html", TEMPLATE_INDEX),
        ("apps/desktop/frontend/src/main.js", TEMPLATE_MAIN_JS),
        ("apps/desktop/frontend/tools.go", FRONTEND_GO),
        ("apps/desktop/frontend/node_modules/vite/index.js", "module.exports = {}\n"),
        ("apps/desktop/frontend/dist/index.html", "<html></html>\n"),
        ("apps/desktop/build/bin/desktop", "binary"),
        ("libs/shared/go.mod", "module example.com/project-go/libs/shared\n\ngo 1.25\n"),
    ]
}

fn memory_workspace() -> MemoryFilesystem {
    template_files()
        .into_iter()
        .fold(MemoryFilesystem::new(), |fs, (path, content)| {
            fs.with_file(Path::new("/ws").join(path), content)
        })
}

fn service(fs: &MemoryFilesystem, registrar: &FakeRegistrar) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(JsonDocumentPatcher::new()),
        Box::new(registrar.clone()),
    )
}

fn desktop_request(module_base: Option<&str>) -> ScaffoldRequest {
    ScaffoldRequest::builder()
        .name("notes")
        .kind("wails")
        .module_base(module_base)
        .product_name(Some("Notes"))
        .company_name("Acme")
        .build()
        .unwrap()
}

// ── Services ────────────────────────────────────────────────────────────────

#[test]
fn service_in_inferred_workspace() {
    let fs = memory_workspace();
    let registrar = FakeRegistrar::default();

    let request = ScaffoldRequest::builder().name("billing").build().unwrap();
    let outcome = service(&fs, &registrar)
        .scaffold(request, Path::new("/ws/apps/desktop"))
        .unwrap();

    assert_eq!(outcome.module_path, "example.com/project-go/apps/billing");
    assert_eq!(outcome.registration, Registration::Registered);
    assert_eq!(
        fs.read_file("/ws/apps/billing/go.mod").unwrap(),
        "module example.com/project-go/apps/billing\n\ngo 1.25\n"
    );
    assert!(
        fs.read_file("/ws/apps/billing/cmd/billing/main.go")
            .unwrap()
            .contains("log.Println(\"billing starting...\")")
    );
    assert_eq!(
        registrar.calls(),
        vec![(PathBuf::from("/ws"), PathBuf::from("apps/billing"))]
    );
}

#[test]
fn existing_target_is_left_untouched() {
    let fs = memory_workspace().with_file("/ws/apps/billing/keep.txt", "mine");
    let registrar = FakeRegistrar::default();
    let before = fs.file_paths();

    let request = ScaffoldRequest::builder()
        .name("billing")
        .module_base(Some("example.org/org"))
        .build()
        .unwrap();
    let err = service(&fs, &registrar)
        .scaffold(request, Path::new("/ws"))
        .unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::Application(ApplicationError::AlreadyExists { .. })
    ));
    assert_eq!(err.to_string(), "target already exists: apps/billing (use --force to overwrite)");
    assert_eq!(fs.file_paths(), before);
    assert!(registrar.calls().is_empty());
}

#[test]
fn outside_workspace_fails() {
    let fs = MemoryFilesystem::new().with_file("/elsewhere/readme.md", "");
    let request = ScaffoldRequest::builder()
        .name("billing")
        .module_base(Some("example.org/org"))
        .build()
        .unwrap();

    let err = service(&fs, &FakeRegistrar::default())
        .scaffold(request, Path::new("/elsewhere"))
        .unwrap_err();
    assert!(matches!(
        err,
        ScaffoldError::Application(ApplicationError::WorkspaceNotFound { .. })
    ));
}

// ── Desktop apps ────────────────────────────────────────────────────────────

#[test]
fn desktop_app_with_new_module_base() {
    let fs = memory_workspace();
    let registrar = FakeRegistrar::default();

    let outcome = service(&fs, &registrar)
        .scaffold(desktop_request(Some("example.org/org")), Path::new("/ws"))
        .unwrap();
    assert_eq!(outcome.relative_path, PathBuf::from("apps/notes"));

    let go_mod = fs.read_file("/ws/apps/notes/go.mod").unwrap();
    assert!(go_mod.starts_with("module example.org/org/apps/notes\n"));
    assert!(go_mod.contains("require example.org/org/libs/shared v0.0.0"));
    assert!(!go_mod.contains("example.com/project-go"));

    let main = fs.read_file("/ws/apps/notes/main.go").unwrap();
    assert!(main.contains("import \"example.org/org/libs/shared\""));
    assert!(main.contains("const title = \"Notes\""));
    assert!(main.contains("const slug = \"notes\""));

    let app = fs.read_file("/ws/apps/notes/internal/app.go").unwrap();
    assert!(app.contains("example.org/org/libs/shared"));

    // Frontend sources are outside the base rewrite.
    assert_eq!(
        fs.read_file("/ws/apps/notes/frontend/tools.go").unwrap(),
        FRONTEND_GO
    );

    let wails: Value =
        serde_json::from_str(&fs.read_file("/ws/apps/notes/wails.json").unwrap()).unwrap();
    assert_eq!(wails["name"], "notes");
    assert_eq!(wails["outputfilename"], "notes");
    assert_eq!(wails["info"]["productName"], "Notes");
    assert_eq!(wails["info"]["companyName"], "Acme");
    assert_eq!(wails["info"]["productVersion"], "1.0.0");
    assert_eq!(wails["frontend:install"], "npm install");

    let package: Value = serde_json::from_str(
        &fs.read_file("/ws/apps/notes/frontend/package.json").unwrap(),
    )
    .unwrap();
    assert_eq!(package["name"], "notes-frontend");
    assert_eq!(package["private"], true);

    assert_eq!(
        fs.read_file("/ws/apps/notes/frontend/index.html").unwrap(),
        "<title>Notes</title>\n"
    );
    assert_eq!(
        fs.read_file("/ws/apps/notes/frontend/src/main.js").unwrap(),
        "document.title = 'Notes';\n"
    );

    assert!(!fs.exists(Path::new("/ws/apps/notes/frontend/node_modules/vite/index.js")));
    assert!(!fs.exists(Path::new("/ws/apps/notes/frontend/dist/index.html")));
    assert!(!fs.exists(Path::new("/ws/apps/notes/build/bin/desktop")));

    // The template itself is untouched.
    assert_eq!(fs.read_file("/ws/apps/desktop/go.mod").unwrap(), TEMPLATE_GO_MOD);

    // No Go source outside the rewrite exclusions keeps the old base.
    let layout = WorkspaceLayout::default();
    let app = Path::new("/ws/apps/notes");
    let sources: Vec<PathBuf> = fs
        .list_files(app, &ExclusionSet::new(&layout.rewrite_exclusions))
        .unwrap()
        .into_iter()
        .filter(|p| p.extension().is_some_and(|ext| ext == "go"))
        .collect();
    assert_eq!(sources.len(), 2, "{sources:?}");
    for relative in sources {
        let content = fs.read_file(app.join(&relative)).unwrap();
        assert!(
            !content.contains("example.com/project-go"),
            "{} still references the template base",
            relative.display()
        );
    }
}

#[test]
fn template_directory_cannot_be_overwritten() {
    let fs = memory_workspace();
    for kind in ["wails", "service"] {
        let request = ScaffoldRequest::builder()
            .name("desktop")
            .kind(kind)
            .module_base(Some("example.org/org"))
            .skip_registration(true)
            .overwrite(true)
            .build()
            .unwrap();

        let err = service(&fs, &FakeRegistrar::default())
            .scaffold(request, Path::new("/ws"))
            .unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::Application(ApplicationError::TargetIsTemplate { .. })
        ));
        assert_eq!(
            err.to_string(),
            "target apps/desktop overlaps the template app at apps/desktop; choose a different --name"
        );
    }

    assert_eq!(fs.read_file("/ws/apps/desktop/go.mod").unwrap(), TEMPLATE_GO_MOD);
    assert_eq!(fs.read_file("/ws/apps/desktop/main.go").unwrap(), TEMPLATE_MAIN);
}

#[test]
fn desktop_app_keeping_template_base_only_renames_module() {
    let fs = memory_workspace();
    let outcome = service(&fs, &FakeRegistrar::default())
        .scaffold(desktop_request(None), Path::new("/ws"))
        .unwrap();
    assert_eq!(outcome.module_path, "example.com/project-go/apps/notes");

    let go_mod = fs.read_file("/ws/apps/notes/go.mod").unwrap();
    assert!(go_mod.starts_with("module example.com/project-go/apps/notes\n"));
    assert!(go_mod.contains("require example.com/project-go/libs/shared"));

    assert_eq!(
        fs.read_file("/ws/apps/notes/internal/app.go").unwrap(),
        TEMPLATE_APP
    );
}

#[test]
fn default_product_is_title_cased_name() {
    let fs = memory_workspace();
    let request = ScaffoldRequest::builder()
        .name("field-notes")
        .kind("app")
        .skip_registration(true)
        .build()
        .unwrap();
    service(&fs, &FakeRegistrar::default())
        .scaffold(request, Path::new("/ws"))
        .unwrap();

    let wails: Value =
        serde_json::from_str(&fs.read_file("/ws/apps/field-notes/wails.json").unwrap()).unwrap();
    assert_eq!(wails["info"]["productName"], "Field Notes");
    assert_eq!(wails["info"]["companyName"], "Your Company");
}

#[test]
fn force_replaces_existing_desktop_app() {
    let fs = memory_workspace().with_file("/ws/apps/notes/stale.txt", "old");
    let request = ScaffoldRequest::builder()
        .name("notes")
        .kind("wails")
        .overwrite(true)
        .skip_registration(true)
        .build()
        .unwrap();

    service(&fs, &FakeRegistrar::default())
        .scaffold(request, Path::new("/ws"))
        .unwrap();
    assert!(fs.read_file("/ws/apps/notes/stale.txt").is_none());
    assert!(fs.read_file("/ws/apps/notes/wails.json").is_some());
}

#[test]
fn registration_failure_still_produces_app() {
    let fs = memory_workspace();
    let registrar = FakeRegistrar::failing();

    let outcome = service(&fs, &registrar)
        .scaffold(desktop_request(Some("example.org/org")), Path::new("/ws"))
        .unwrap();

    assert_eq!(
        outcome.registration,
        Registration::Failed {
            reason: "'go' not found on PATH".into(),
            manual_command: "go work use ./apps/notes".into(),
        }
    );
    assert!(fs.read_file("/ws/apps/notes/wails.json").is_some());
}

#[test]
fn rescaffolding_is_stable() {
    let run = || {
        let fs = memory_workspace();
        service(&fs, &FakeRegistrar::default())
            .scaffold(desktop_request(Some("example.org/org")), Path::new("/ws"))
            .unwrap();
        fs.file_paths()
            .into_iter()
            .map(|p| {
                let content = fs.read_file(&p);
                (p, content)
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

// ── Local filesystem ────────────────────────────────────────────────────────

fn local_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    for (relative, content) in template_files() {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

#[test]
fn desktop_app_on_disk() {
    let ws = local_workspace();
    let registrar = FakeRegistrar::default();
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(JsonDocumentPatcher::new()),
        Box::new(registrar.clone()),
    );

    let outcome = service
        .scaffold(desktop_request(Some("example.org/org")), &ws.path().join("libs"))
        .unwrap();

    let app = ws.path().join("apps/notes");
    assert_eq!(outcome.destination, app);
    assert!(app.join("frontend/src/main.js").is_file());
    assert!(!app.join("frontend/node_modules").exists());
    assert!(!app.join("build").exists());

    let wails = fs::read_to_string(app.join("wails.json")).unwrap();
    assert!(wails.ends_with("}\n"));
    assert!(wails.contains("  \"name\": \"notes\""));

    let go_mod = fs::read_to_string(app.join("go.mod")).unwrap();
    assert!(go_mod.starts_with("module example.org/org/apps/notes\n"));

    assert_eq!(registrar.calls().len(), 1);
    assert_eq!(registrar.calls()[0].1, PathBuf::from("apps/notes"));
}
