//! Workspace Builder - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Validate the request
//! 2. Optionally purge the previous workspace
//! 3. Create the skeleton (`tmp`, `cores`, `libs`)
//! 4. Build every core in input order
//! 5. Create the shared UVM library component
//!
//! Any filesystem failure aborts immediately. Nothing is rolled back.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{BuildEvent, BuildReporter, Filesystem},
    },
    domain::{
        ComponentDescriptor, DESCRIPTOR_FILE, TemplateKind, TemplateVariant, WorkspaceLayout,
        WorkspaceReport, WorkspaceRequest, component_ref,
    },
    error::WsgenResult,
};

/// Name of the shared verification-framework library component.
pub const UVM_LIB: &str = "uvm";

/// Source file of the framework package, resolved by the build tool.
pub const UVM_PKG_FILE: &str = "\"${UVM_HOME}/uvm_pkg.sv\"";

/// Include path of the framework sources.
pub const UVM_INCDIR: &str = "\"+incdir+${UVM_HOME}\"";

/// Main workspace generation service.
///
/// Holds the injected adapters; each run happens inside a [`BuildSession`].
pub struct WorkspaceBuilder {
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn BuildReporter>,
}

impl WorkspaceBuilder {
    /// Create a new builder with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use wsgen_core::application::WorkspaceBuilder;
    ///
    /// let builder = WorkspaceBuilder::new(
    ///     Box::new(filesystem), // impl Filesystem
    ///     Box::new(reporter),   // impl BuildReporter
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, reporter: Box<dyn BuildReporter>) -> Self {
        Self {
            filesystem,
            reporter,
        }
    }

    /// Start a session that records into a report rooted at `root`.
    pub fn session(&self, variant: TemplateVariant, root: impl Into<PathBuf>) -> BuildSession<'_> {
        BuildSession {
            filesystem: self.filesystem.as_ref(),
            reporter: self.reporter.as_ref(),
            variant,
            report: WorkspaceReport::new(root),
        }
    }

    /// Generate the workspace described by `request`.
    #[instrument(
        skip_all,
        fields(
            workspace = %request.workspace_name(),
            root = %request.root_dir().display(),
            variant = %request.variant(),
        )
    )]
    pub fn execute(&self, request: WorkspaceRequest) -> WsgenResult<WorkspaceReport> {
        request.validate()?;

        let layout = WorkspaceLayout::new(request.workspace_path());
        let mut session = self.session(request.variant(), layout.root());

        info!(cores = request.core_names().len(), "Generating workspace");

        if request.purge_existing() && self.filesystem.exists(layout.root()) {
            session.purge(layout.root())?;
        }

        session.create_directory(&layout.tmp())?;
        session.create_directory(&layout.cores())?;
        session.create_directory(&layout.libs())?;

        for core in request.core_names() {
            session.build_core(layout.root(), core)?;
        }

        let uvm = layout.uvm_lib();
        session.create_directory(&uvm)?;
        session.write_component_descriptor(
            &uvm,
            ComponentDescriptor::new(UVM_LIB)
                .with_files([UVM_PKG_FILE])
                .with_options([UVM_INCDIR]),
        )?;

        let report = session.finish();
        info!(
            directories = report.directory_count(),
            files = report.file_count(),
            "Workspace generated"
        );
        Ok(report)
    }
}

/// One generation run: the adapters, the chosen variant, and what has been
/// done so far.
pub struct BuildSession<'a> {
    filesystem: &'a dyn Filesystem,
    reporter: &'a dyn BuildReporter,
    variant: TemplateVariant,
    report: WorkspaceReport,
}

impl BuildSession<'_> {
    pub fn finish(self) -> WorkspaceReport {
        self.report
    }

    /// Recursively delete `path`.
    pub fn purge(&mut self, path: &Path) -> WsgenResult<()> {
        debug!(path = %path.display(), "remove_dir_all");
        self.filesystem.remove_dir_all(path)?;
        self.report.purged = true;
        self.emit(BuildEvent::Purged(path.to_path_buf()));
        Ok(())
    }

    /// Create `path` and any missing parents.
    ///
    /// # Errors
    /// `PathExists` if `path` is already present, `FilesystemError` if the
    /// adapter fails.
    pub fn create_directory(&mut self, path: &Path) -> WsgenResult<()> {
        if self.filesystem.exists(path) {
            return Err(ApplicationError::PathExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        debug!(path = %path.display(), "create_dir_all");
        self.filesystem.create_dir_all(path)?;
        self.report.record_directory(path);
        self.emit(BuildEvent::DirectoryCreated(path.to_path_buf()));
        Ok(())
    }

    /// Write `dir/comp.yml`.
    ///
    /// With the framework variant an empty option list is replaced by an
    /// include path for `dir`.
    pub fn write_component_descriptor(
        &mut self,
        dir: &Path,
        mut descriptor: ComponentDescriptor,
    ) -> WsgenResult<()> {
        if descriptor.options.is_empty() && self.variant == TemplateVariant::Framework {
            descriptor.options = vec![ComponentDescriptor::include_dir_option(dir)];
        }
        self.write(&dir.join(DESCRIPTOR_FILE), &descriptor.to_string())
    }

    /// Write `dir/<name>.v`.
    pub fn write_design_stub(&mut self, dir: &Path, name: &str) -> WsgenResult<()> {
        self.write_template(dir, TemplateKind::DesignStub, name)
    }

    /// Write `dir/<name>_tb.sv`.
    pub fn write_testbench_stub(&mut self, dir: &Path, name: &str) -> WsgenResult<()> {
        self.write_template(dir, TemplateKind::TestbenchStub, name)
    }

    /// Write `dir/<name>_env_pkg.sv`, plus `dir/<name>_test.sv` for the
    /// framework variant.
    pub fn write_environment_package(&mut self, dir: &Path, name: &str) -> WsgenResult<()> {
        self.write_template(dir, TemplateKind::EnvironmentPackage, name)?;
        if self.variant.emits_test_class() {
            self.write_template(dir, TemplateKind::TestClass, name)?;
        }
        Ok(())
    }

    /// Create `cores/<name>/{rtl,sim/env,sim/tb,syn}` under `workspace_root`
    /// with their templates and descriptors.
    #[instrument(skip(self, workspace_root))]
    pub fn build_core(&mut self, workspace_root: &Path, name: &str) -> WsgenResult<()> {
        let core = WorkspaceLayout::new(workspace_root).core(name);
        let design_file = TemplateKind::DesignStub.file_name(name);
        let env_file = TemplateKind::EnvironmentPackage.file_name(name);
        let tb_file = TemplateKind::TestbenchStub.file_name(name);
        let env_name = format!("{name}_env");

        let rtl = core.rtl();
        self.create_directory(&rtl)?;
        self.write_design_stub(&rtl, name)?;
        self.write_component_descriptor(&rtl, ComponentDescriptor::new(name).with_files([design_file]))?;

        let env = core.env();
        self.create_directory(&env)?;
        self.write_environment_package(&env, name)?;
        self.write_component_descriptor(
            &env,
            ComponentDescriptor::new(env_name.as_str())
                .with_files([env_file])
                .with_requires([component_ref(UVM_LIB)]),
        )?;

        let tb = core.tb();
        self.create_directory(&tb)?;
        self.write_testbench_stub(&tb, name)?;
        self.write_component_descriptor(
            &tb,
            ComponentDescriptor::new(format!("{name}_tb"))
                .with_files([tb_file])
                .with_requires([
                    component_ref(UVM_LIB),
                    component_ref(name),
                    component_ref(&env_name),
                ]),
        )?;

        self.create_directory(&core.syn())?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_template(&mut self, dir: &Path, kind: TemplateKind, name: &str) -> WsgenResult<()> {
        let content = kind.render(self.variant, name);
        self.write(&dir.join(kind.file_name(name)), &content)
    }

    fn write(&mut self, path: &Path, content: &str) -> WsgenResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "write_file");
        self.filesystem.write_file(path, content)?;
        self.report.record_file(path);
        self.emit(BuildEvent::FileWritten(path.to_path_buf()));
        Ok(())
    }

    fn emit(&self, event: BuildEvent) {
        self.reporter.report(&event);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{MockBuildReporter, MockFilesystem};
    use crate::error::WsgenError;

    /// Shared-state fake used where call ordering and contents matter.
    #[derive(Clone, Default)]
    struct FakeFs {
        state: Arc<Mutex<FakeState>>,
    }

    #[derive(Default)]
    struct FakeState {
        dirs: BTreeSet<PathBuf>,
        files: BTreeMap<PathBuf, String>,
        removed: Vec<PathBuf>,
    }

    impl FakeFs {
        fn file(&self, path: &str) -> Option<String> {
            self.state.lock().unwrap().files.get(Path::new(path)).cloned()
        }

        fn seed_file(&self, path: &str) {
            let mut s = self.state.lock().unwrap();
            let path = PathBuf::from(path);
            for a in path.ancestors().skip(1) {
                s.dirs.insert(a.to_path_buf());
            }
            s.files.insert(path, "stale".into());
        }
    }

    impl Filesystem for FakeFs {
        fn create_dir_all(&self, path: &Path) -> WsgenResult<()> {
            let mut s = self.state.lock().unwrap();
            for a in path.ancestors() {
                s.dirs.insert(a.to_path_buf());
            }
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> WsgenResult<()> {
            let mut s = self.state.lock().unwrap();
            s.files.insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            let s = self.state.lock().unwrap();
            s.dirs.contains(path) || s.files.contains_key(path)
        }

        fn remove_dir_all(&self, path: &Path) -> WsgenResult<()> {
            let mut s = self.state.lock().unwrap();
            s.dirs.retain(|d| !d.starts_with(path));
            s.files.retain(|f, _| !f.starts_with(path));
            s.removed.push(path.to_path_buf());
            Ok(())
        }
    }

    struct Quiet;

    impl BuildReporter for Quiet {
        fn report(&self, _event: &BuildEvent) {}
    }

    fn builder(fs: &FakeFs) -> WorkspaceBuilder {
        WorkspaceBuilder::new(Box::new(fs.clone()), Box::new(Quiet))
    }

    fn request(cores: &[&str]) -> WorkspaceRequest {
        WorkspaceRequest::builder()
            .root_dir("/tmp")
            .workspace_name("ws1")
            .cores(cores.iter().copied())
            .build()
            .unwrap()
    }

    // ── execute ──────────────────────────────────────────────────────────────

    #[test]
    fn execute_creates_expected_directories_in_order() {
        let fs = FakeFs::default();
        let report = builder(&fs).execute(request(&["cpu", "dma"])).unwrap();

        let layout = WorkspaceLayout::new("/tmp/ws1");
        assert_eq!(
            report.directories,
            layout.directories(&["cpu".into(), "dma".into()])
        );
        assert!(!report.purged);
    }

    #[test]
    fn execute_writes_design_stub_for_example_request() {
        let fs = FakeFs::default();
        builder(&fs).execute(request(&["cpu"])).unwrap();

        let stub = fs.file("/tmp/ws1/cores/cpu/rtl/cpu.v").unwrap();
        assert!(stub.starts_with("module cpu ("));
        assert!(stub.contains("input clk,"));
        assert!(stub.contains("input rst_n"));
        assert!(stub.ends_with(");\n\nendmodule\n"));
    }

    #[test]
    fn execute_wires_descriptor_requires_by_convention() {
        let fs = FakeFs::default();
        builder(&fs).execute(request(&["cpu"])).unwrap();

        assert_eq!(
            fs.file("/tmp/ws1/cores/cpu/rtl/comp.yml").unwrap(),
            "name: comp_cpu\nfiles: [cpu.v]\noptions: []\nrequires: []\n"
        );
        assert_eq!(
            fs.file("/tmp/ws1/cores/cpu/sim/env/comp.yml").unwrap(),
            "name: comp_cpu_env\nfiles: [cpu_env_pkg.sv]\noptions: []\nrequires: [comp_uvm]\n"
        );
        assert_eq!(
            fs.file("/tmp/ws1/cores/cpu/sim/tb/comp.yml").unwrap(),
            "name: comp_cpu_tb\nfiles: [cpu_tb.sv]\noptions: []\n\
             requires: [comp_uvm,comp_cpu,comp_cpu_env]\n"
        );
        assert_eq!(
            fs.file("/tmp/ws1/libs/uvm/comp.yml").unwrap(),
            "name: comp_uvm\nfiles: [\"${UVM_HOME}/uvm_pkg.sv\"]\n\
             options: [\"+incdir+${UVM_HOME}\"]\nrequires: []\n"
        );
    }

    #[test]
    fn basic_variant_writes_no_test_class() {
        let fs = FakeFs::default();
        let report = builder(&fs).execute(request(&["cpu"])).unwrap();
        assert!(fs.file("/tmp/ws1/cores/cpu/sim/env/cpu_test.sv").is_none());
        // rtl: 2, env: 2, tb: 2, uvm: 1
        assert_eq!(report.file_count(), 7);
    }

    #[test]
    fn framework_variant_adds_test_class_and_default_incdir() {
        let fs = FakeFs::default();
        let req = WorkspaceRequest::builder()
            .root_dir("/tmp")
            .workspace_name("ws1")
            .core("cpu")
            .variant(TemplateVariant::Framework)
            .build()
            .unwrap();
        let report = builder(&fs).execute(req).unwrap();

        assert!(fs.file("/tmp/ws1/cores/cpu/sim/env/cpu_test.sv").is_some());
        assert_eq!(report.file_count(), 8);
        let rtl = fs.file("/tmp/ws1/cores/cpu/rtl/comp.yml").unwrap();
        assert!(rtl.contains("options: [\"+incdir+/tmp/ws1/cores/cpu/rtl\"]"));
        // Supplied options are never replaced.
        let uvm = fs.file("/tmp/ws1/libs/uvm/comp.yml").unwrap();
        assert!(uvm.contains("options: [\"+incdir+${UVM_HOME}\"]"));
    }

    #[test]
    fn empty_core_list_builds_skeleton_only() {
        let fs = FakeFs::default();
        let report = builder(&fs).execute(request(&[])).unwrap();
        assert_eq!(report.directory_count(), 4);
        assert_eq!(report.file_count(), 1);
    }

    #[test]
    fn purge_removes_previous_tree_first() {
        let fs = FakeFs::default();
        fs.seed_file("/tmp/ws1/cores/old/rtl/old.v");

        let req = WorkspaceRequest::builder()
            .root_dir("/tmp")
            .workspace_name("ws1")
            .core("cpu")
            .purge_existing(true)
            .build()
            .unwrap();
        let report = builder(&fs).execute(req).unwrap();

        assert!(report.purged);
        assert!(fs.file("/tmp/ws1/cores/old/rtl/old.v").is_none());
        assert_eq!(
            fs.state.lock().unwrap().removed,
            vec![PathBuf::from("/tmp/ws1")]
        );
    }

    #[test]
    fn purge_of_missing_workspace_is_skipped() {
        let fs = FakeFs::default();
        let req = WorkspaceRequest::builder()
            .root_dir("/tmp")
            .workspace_name("ws1")
            .purge_existing(true)
            .build()
            .unwrap();
        let report = builder(&fs).execute(req).unwrap();
        assert!(!report.purged);
        assert!(fs.state.lock().unwrap().removed.is_empty());
    }

    #[test]
    fn existing_workspace_without_purge_fails() {
        let fs = FakeFs::default();
        builder(&fs).execute(request(&["cpu"])).unwrap();

        let err = builder(&fs).execute(request(&["cpu"])).unwrap_err();
        assert!(err.is_filesystem());
        assert!(matches!(
            err,
            WsgenError::Application(ApplicationError::PathExists { ref path })
                if path == Path::new("/tmp/ws1/tmp")
        ));
    }

    #[test]
    fn duplicate_core_fails_on_second_build() {
        let fs = FakeFs::default();
        let err = builder(&fs).execute(request(&["cpu", "cpu"])).unwrap_err();
        assert!(err.is_filesystem());
        // First core is left in place.
        assert!(fs.file("/tmp/ws1/cores/cpu/rtl/cpu.v").is_some());
    }

    // ── failure propagation (mocks) ──────────────────────────────────────────

    #[test]
    fn directory_failure_aborts_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/tmp/ws1/tmp"))
            .times(1)
            .returning(|p| {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            });
        fs.expect_write_file().never();
        fs.expect_remove_dir_all().never();

        let mut reporter = MockBuildReporter::new();
        reporter.expect_report().never();

        let builder = WorkspaceBuilder::new(Box::new(fs), Box::new(reporter));
        let err = builder.execute(request(&["cpu"])).unwrap_err();
        assert!(err.is_filesystem());
    }

    #[test]
    fn purge_failure_aborts_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_remove_dir_all().times(1).returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "busy".into(),
            }
            .into())
        });
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let builder = WorkspaceBuilder::new(Box::new(fs), Box::new(Quiet));
        let req = WorkspaceRequest::builder()
            .root_dir("/tmp")
            .workspace_name("ws1")
            .purge_existing(true)
            .build()
            .unwrap();
        assert!(builder.execute(req).unwrap_err().is_filesystem());
    }

    #[test]
    fn write_failure_stops_core_build() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });

        let builder = WorkspaceBuilder::new(Box::new(fs), Box::new(Quiet));
        let mut session = builder.session(TemplateVariant::Basic, "/ws");
        assert!(session.build_core(Path::new("/ws"), "cpu").is_err());
        let report = session.finish();
        assert_eq!(report.directories, vec![PathBuf::from("/ws/cores/cpu/rtl")]);
        assert!(report.files.is_empty());
    }

    // ── reporting ────────────────────────────────────────────────────────────

    #[test]
    fn reporter_sees_every_action() {
        let fs = FakeFs::default();
        let mut reporter = MockBuildReporter::new();
        reporter
            .expect_report()
            .withf(|e| matches!(e, BuildEvent::DirectoryCreated(_)))
            .times(4 + 4)
            .return_const(());
        reporter
            .expect_report()
            .withf(|e| matches!(e, BuildEvent::FileWritten(_)))
            .times(7)
            .return_const(());

        let builder = WorkspaceBuilder::new(Box::new(fs), Box::new(reporter));
        builder.execute(request(&["cpu"])).unwrap();
    }

    #[test]
    fn create_directory_reports_creating_line() {
        let fs = FakeFs::default();
        let mut reporter = MockBuildReporter::new();
        reporter
            .expect_report()
            .withf(|e| e.to_string() == "Creating directory /a/b")
            .times(1)
            .return_const(());

        let builder = WorkspaceBuilder::new(Box::new(fs), Box::new(reporter));
        let mut session = builder.session(TemplateVariant::Basic, "/a");
        session.create_directory(Path::new("/a/b")).unwrap();
    }
}
