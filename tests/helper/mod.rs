//! Checkout fixtures shared by the integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary workspace holding a current checkout at its root and a master
/// checkout under `master-branch/`, the layout CI produces.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("master-branch")).unwrap();
        Self { dir }
    }

    pub fn current_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn master_dir(&self) -> PathBuf {
        self.dir.path().join("master-branch")
    }

    pub fn write_current(&self, name: &str, content: &str) -> &Self {
        std::fs::write(self.current_dir().join(name), content).unwrap();
        self
    }

    pub fn write_master(&self, name: &str, content: &str) -> &Self {
        std::fs::write(self.master_dir().join(name), content).unwrap();
        self
    }

    /// Write both files of the current checkout
    pub fn current(&self, version: &str, maven: &str, gradle: &str) -> &Self {
        self.write_current("gradle.properties", &properties(version))
            .write_current("README.md", &readme(maven, gradle))
    }

    /// Write both files of the master checkout
    pub fn master(&self, version: &str, maven: &str, gradle: &str) -> &Self {
        self.write_master("gradle.properties", &properties(version))
            .write_master("README.md", &readme(maven, gradle))
    }
}

pub fn properties(version: &str) -> String {
    format!(
        "# Project metadata\ngroup=com.spotty-server\nversion={version}\norg.gradle.parallel=true\n"
    )
}

pub fn readme(maven: &str, gradle: &str) -> String {
    format!(
        r#"# Spotty

Lightweight non-blocking HTTP server.

## Installation

### Maven

```xml
<dependency>
    <groupId>com.spotty-server</groupId>
    <artifactId>core</artifactId>
    <version>{maven}</version>
</dependency>
```

### Gradle

```groovy
implementation "com.spotty-server:core:{gradle}"
```
"#
    )
}
