// file: src/repository/inspect.rs
// description: corpus health checks over indexes, shards and translations
// reference: https://docs.rs/walkdir

use crate::error::RepositoryError;
use crate::models::{EntityKind, Record};
use crate::repository::layout::Layout;
use crate::repository::store::load_json;
use crate::utils::{HealthCheck, HealthReport, HealthStatus, PathParams, Validator};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct CorpusInspector<'a> {
    root: PathBuf,
    layout: &'a Layout,
}

impl<'a> CorpusInspector<'a> {
    pub fn new(root: impl Into<PathBuf>, layout: &'a Layout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn inspect(&self) -> HealthReport {
        info!("Inspecting corpus at {}", self.root.display());
        let mut checks = vec![self.check_root()];

        if checks[0].status == HealthStatus::Healthy {
            checks.push(self.check_top_level_shard());

            for kind in EntityKind::ALL {
                if let Some(index) = self.layout.index_file(kind) {
                    checks.push(self.check_index(kind, index));
                }
            }

            for kind in EntityKind::ALL {
                if let Some(dir) = self.shard_directory(kind) {
                    checks.push(self.check_shard_directory(kind, &dir));
                }
            }

            checks.push(self.check_translations());
        }

        HealthReport::new(checks, env!("CARGO_PKG_VERSION").to_string())
    }

    fn check_root(&self) -> HealthCheck {
        let start = Instant::now();
        match Validator::validate_directory(&self.root) {
            Ok(()) => HealthCheck::healthy("root", "", start.elapsed()),
            Err(e) => HealthCheck::unhealthy("root", e.to_string(), start.elapsed()),
        }
    }

    fn check_top_level_shard(&self) -> HealthCheck {
        let start = Instant::now();
        let component = "shard:planet";

        let path = match self
            .layout
            .resolve_path(EntityKind::Planet, &self.root, &PathParams::new())
        {
            Ok(path) => path,
            Err(e) => return HealthCheck::unhealthy(component, e.to_string(), start.elapsed()),
        };

        match load_json::<Vec<Record>>(&path) {
            Ok(records) => HealthCheck::healthy(
                component,
                format!("{} records", records.len()),
                start.elapsed(),
            ),
            Err(e) => HealthCheck::unhealthy(component, e.to_string(), start.elapsed()),
        }
    }

    fn check_index(&self, kind: EntityKind, file: &Path) -> HealthCheck {
        let start = Instant::now();
        let component = format!("index:{}", kind);

        match load_json::<HashMap<String, String>>(&self.root.join(file)) {
            Ok(index) if index.is_empty() => {
                HealthCheck::degraded(&component, "index is empty", start.elapsed())
            }
            Ok(index) => HealthCheck::healthy(
                &component,
                format!("{} entries", index.len()),
                start.elapsed(),
            ),
            Err(e) => HealthCheck::unhealthy(&component, e.to_string(), start.elapsed()),
        }
    }

    /// Directory part of a kind's shard template, when the template has one.
    fn shard_directory(&self, kind: EntityKind) -> Option<PathBuf> {
        let template = self.layout.shard_template(kind)?;
        let parent = Path::new(template.as_str()).parent()?;

        if parent.as_os_str().is_empty() {
            None
        } else {
            Some(self.root.join(parent))
        }
    }

    fn check_shard_directory(&self, kind: EntityKind, dir: &Path) -> HealthCheck {
        let start = Instant::now();
        let component = format!("shards:{}", kind);

        if !dir.is_dir() {
            return HealthCheck::degraded(
                &component,
                format!("no shard directory at {}", dir.display()),
                start.elapsed(),
            );
        }

        let count = count_json_files(dir, 1);
        debug!("{} shard files under {}", count, dir.display());

        if count == 0 {
            HealthCheck::degraded(&component, "no shard files", start.elapsed())
        } else {
            HealthCheck::healthy(&component, format!("{} files", count), start.elapsed())
        }
    }

    fn check_translations(&self) -> HealthCheck {
        let start = Instant::now();
        let dir = self.root.join(self.layout.translations_dir());

        if !dir.is_dir() {
            return HealthCheck::degraded(
                "translations",
                RepositoryError::FileNotFound { path: dir }.to_string(),
                start.elapsed(),
            );
        }

        HealthCheck::healthy(
            "translations",
            format!("{} files", count_json_files(&dir, usize::MAX)),
            start.elapsed(),
        )
    }
}

fn count_json_files(dir: &Path, max_depth: usize) -> usize {
    WalkDir::new(dir)
        .max_depth(max_depth)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        .count()
}
