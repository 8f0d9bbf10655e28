//! Renders templates and writes an artifact's file set.
//!
//! | Kind               | Files                                                      |
//! |--------------------|------------------------------------------------------------|
//! | atom, molecule     | `_name.scss`, `name-template.html`                         |
//! | component          | the above plus `Name.js`, `Name.spec.js`, `ux-model.json`, |
//! |                    | `name.hbs`                                                 |

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, TemplateStore},
    domain::{Artifact, ArtifactFiles, RenderContext, TemplateKind, placeholders},
    error::ArgonResult,
};

/// Writes the files of one artifact.
pub struct ArtifactGenerator<'a> {
    filesystem: &'a dyn Filesystem,
    store: &'a dyn TemplateStore,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> ArtifactGenerator<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        store: &'a dyn TemplateStore,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self {
            filesystem,
            store,
            renderer,
        }
    }

    /// Create the artifact folder under `root` and write its files.
    ///
    /// The empty stylesheet is written before any template is loaded. Nothing
    /// is cleaned up when a later step fails. Returns the written paths.
    #[instrument(skip_all, fields(artifact = %artifact))]
    pub fn generate(
        &self,
        root: &Path,
        artifact: &Artifact,
        layout_file_name: &str,
    ) -> ArgonResult<Vec<PathBuf>> {
        let dir = root.join(artifact.relative_path());
        self.filesystem.create_dir_all(&dir)?;

        let stylesheet = dir.join(artifact.stylesheet_file_name());
        self.filesystem.write_file(&stylesheet, "")?;
        let mut written = vec![stylesheet];

        let files = self.render_files(artifact, layout_file_name)?;
        files.validate()?;

        for file in files.files() {
            let path = dir.join(&file.path);
            debug!(path = %path.display(), "Writing file");
            self.filesystem.write_file(&path, &file.content)?;
            written.push(path);
        }

        info!(files = written.len(), "Artifact files written");
        Ok(written)
    }

    /// Render every templated file for `artifact` without touching disk.
    pub fn render_files(
        &self,
        artifact: &Artifact,
        layout_file_name: &str,
    ) -> ArgonResult<ArtifactFiles> {
        let folder = artifact.folder_name();
        let symbol = artifact.symbol_name();
        let mut files = ArtifactFiles::new();

        let markup = self.render(
            TemplateKind::markup_for(artifact.kind()),
            &RenderContext::new()
                .first(placeholders::TEMPLATE_FILE_NAME, &folder)
                .first(placeholders::CLASS_NAME, &symbol),
        )?;
        files.add_file(artifact.markup_file_name(), markup);

        if !artifact.kind().is_component() {
            return Ok(files);
        }

        let script = self.render(
            TemplateKind::Script,
            &RenderContext::new().all(placeholders::COMPONENT, &symbol),
        )?;
        files.add_file(artifact.script_file_name(), script);

        let test = self.render(
            TemplateKind::ScriptTest,
            &RenderContext::new()
                .all(placeholders::COMPONENT, &symbol)
                .all(placeholders::INSTANCE, artifact.instance_name()),
        )?;
        files.add_file(artifact.test_file_name(), test);

        files.add_file(artifact.metadata_file_name(), "{}");

        let preview = self.render(
            TemplateKind::Preview,
            &RenderContext::new()
                .all(placeholders::NAME, &folder)
                .first(placeholders::LAYOUT_FILE_NAME, layout_file_name),
        )?;
        files.add_file(artifact.preview_file_name(), preview);

        Ok(files)
    }

    fn render(&self, kind: TemplateKind, context: &RenderContext) -> ArgonResult<String> {
        let body = self.store.load(kind)?;
        self.renderer.render(&body, context)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockFilesystem, MockTemplateRenderer, MockTemplateStore},
    };
    use crate::domain::ArtifactKind;
    use crate::error::ArgonError;

    fn store() -> MockTemplateStore {
        let mut store = MockTemplateStore::new();
        store.expect_load().returning(|kind| {
            Ok(match kind {
                TemplateKind::Sly => "<sly #templateFileName# #className#/>",
                TemplateKind::SlyComponent => "<div #templateFileName# #className# #className#>",
                TemplateKind::Script => "class #component# {} export default #component#;",
                TemplateKind::ScriptTest => "new #component#(); #instance# #instance#",
                TemplateKind::Preview => "#name# #name# #layoutFileName# #layoutFileName#",
            }
            .to_string())
        });
        store
    }

    fn renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|body, context| Ok(context.render(body)));
        renderer
    }

    fn recording_fs() -> (MockFilesystem, Arc<Mutex<Vec<(PathBuf, String)>>>) {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&writes);
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |path, content| {
            sink.lock()
                .unwrap()
                .push((path.to_path_buf(), content.to_string()));
            Ok(())
        });
        (fs, writes)
    }

    #[test]
    fn component_gets_six_files_with_substitutions() {
        let (fs, writes) = recording_fs();
        let (store, renderer) = (store(), renderer());
        let generator = ArtifactGenerator::new(&fs, &store, &renderer);
        let artifact =
            Artifact::new("myCard", ArtifactKind::Component, "source/components").unwrap();

        let written = generator
            .generate(Path::new("/work"), &artifact, "default.hbs")
            .unwrap();
        assert_eq!(written.len(), 6);

        let writes = writes.lock().unwrap();
        let content = |name: &str| {
            writes
                .iter()
                .find(|(p, _)| p.ends_with(name))
                .map(|(_, c)| c.clone())
                .unwrap_or_else(|| panic!("{name} not written"))
        };

        assert_eq!(writes[0].0, PathBuf::from("/work/source/components/mycard/_myCard.scss"));
        assert_eq!(content("_myCard.scss"), "");
        assert_eq!(
            content("mycard-template.html"),
            "<div mycard MyCard #className#>"
        );
        assert_eq!(
            content("MyCard.js"),
            "class MyCard {} export default MyCard;"
        );
        assert_eq!(content("MyCard.spec.js"), "new MyCard(); myCard myCard");
        assert_eq!(content("ux-model.json"), "{}");
        assert_eq!(
            content("mycard.hbs"),
            "mycard mycard default.hbs #layoutFileName#"
        );
    }

    #[test]
    fn atom_gets_stylesheet_and_markup_only() {
        let (fs, writes) = recording_fs();
        let (store, renderer) = (store(), renderer());
        let generator = ArtifactGenerator::new(&fs, &store, &renderer);
        let artifact = Artifact::new("Icon", ArtifactKind::Atom, "source/atoms").unwrap();

        let written = generator
            .generate(Path::new("/work"), &artifact, "default.hbs")
            .unwrap();

        assert_eq!(
            written,
            vec![
                PathBuf::from("/work/source/atoms/icon/_icon.scss"),
                PathBuf::from("/work/source/atoms/icon/icon-template.html"),
            ]
        );
        assert_eq!(writes.lock().unwrap()[1].1, "<sly icon Icon/>");
    }

    #[test]
    fn template_failure_leaves_only_the_stylesheet() {
        let (fs, writes) = recording_fs();
        let renderer = renderer();
        let mut store = MockTemplateStore::new();
        store.expect_load().returning(|kind| {
            Err(ApplicationError::TemplateRead {
                template: kind.to_string(),
                reason: "missing".into(),
            }
            .into())
        });
        let generator = ArtifactGenerator::new(&fs, &store, &renderer);
        let artifact = Artifact::new("card", ArtifactKind::Molecule, "m").unwrap();

        let err = generator
            .generate(Path::new("/work"), &artifact, "default.hbs")
            .unwrap_err();

        assert!(matches!(
            err,
            ArgonError::Application(ApplicationError::TemplateRead { .. })
        ));
        let writes = writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert!(writes[0].0.ends_with("_card.scss"));
    }
}
