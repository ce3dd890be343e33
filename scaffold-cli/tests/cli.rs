use std::{
	path::Path,
	process::{Command, Output},
};

use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

struct Harness {
	home: TempDir,
}

impl Harness {
	fn new() -> Self {
		Self { home: tempdir().unwrap() }
	}

	fn run<I, S>(&self, args: I) -> Output
	where
		I: IntoIterator<Item = S>,
		S: AsRef<std::ffi::OsStr>,
	{
		Command::new(env!("CARGO_BIN_EXE_scaffold"))
			.args(args)
			.env("SCAFFOLD_CONFIG_DIR", self.home.path().join("config"))
			.env("SCAFFOLD_LOG_DIR", self.home.path().join("logs"))
			.output()
			.unwrap()
	}

	fn stdout<I, S>(&self, args: I) -> String
	where
		I: IntoIterator<Item = S>,
		S: AsRef<std::ffi::OsStr>,
	{
		let output = self.run(args);
		assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
		String::from_utf8(output.stdout).unwrap()
	}
}

fn touch(path: &Path) {
	std::fs::write(path, "").unwrap();
}

fn arg(path: &Path) -> &str {
	path.to_str().unwrap()
}

#[test]
fn suffix_skips_taken_names() {
	let harness = Harness::new();
	let dir = tempdir().unwrap();
	touch(&dir.path().join("Filter.hxx"));
	touch(&dir.path().join("Filter.h"));

	let out = harness.stdout(["suffix", arg(dir.path()), "Filter", "-e", "hxx", "-e", "h"]);
	assert_eq!(out, "1\n");

	touch(&dir.path().join("Filter1.h"));
	let out = harness.stdout(["suffix", arg(dir.path()), "Filter"]);
	assert_eq!(out, "2\n");
}

#[test]
fn suffix_cleans_extension_flags() {
	let harness = Harness::new();
	let dir = tempdir().unwrap();
	touch(&dir.path().join("Filter.h"));

	let out = harness.stdout(["suffix", arg(dir.path()), "Filter", "-e", ".h"]);
	assert_eq!(out, "1\n");

	let out = harness.stdout(["suffix", arg(dir.path()), "Filter", "-e", "", "-e", "h"]);
	assert_eq!(out, "1\n");
}

#[test]
fn suffix_rejects_only_blank_extensions() {
	let harness = Harness::new();
	let dir = tempdir().unwrap();
	touch(&dir.path().join("Filter"));

	let output = harness.run(["suffix", arg(dir.path()), "Filter", "-e", ""]);
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
}

#[test]
fn relative_against_dot_root() {
	let harness = Harness::new();
	let out = harness.stdout(["relative", ".", "src/io"]);
	assert_eq!(out, "src/io\n");
}

#[test]
fn relative_ignores_broken_config() {
	let harness = Harness::new();
	let config_dir = harness.home.path().join("config");
	std::fs::create_dir_all(&config_dir).unwrap();
	std::fs::write(config_dir.join("config.toml"), "extensions = 3").unwrap();

	let out = harness.stdout(["relative", "/project/src", "/project/src/io"]);
	assert_eq!(out, "io\n");

	let dir = tempdir().unwrap();
	let output = harness.run(["suffix", arg(dir.path()), "Filter"]);
	assert!(!output.status.success());
}

#[test]
fn relative_prints_slash_form() {
	let harness = Harness::new();
	let dir = tempdir().unwrap();
	let folder = dir.path().join("filters").join("denoise");

	let out = harness.stdout(["relative", arg(dir.path()), arg(&folder)]);
	assert_eq!(out, "filters/denoise\n");

	let out = harness.stdout(["relative", arg(dir.path()), arg(dir.path())]);
	assert_eq!(out, "\n");
}

#[test]
fn target_creates_missing_folders() {
	let harness = Harness::new();
	let dir = tempdir().unwrap();

	let out = harness.stdout(["target", arg(dir.path()), "io/Reader", "--folder", "sub"]);
	assert!(dir.path().join("sub").join("io").is_dir());
	assert!(out.contains("Reader.hxx"), "{out}");
	assert!(out.contains("Reader.h\n"), "{out}");
}

#[test]
fn target_rejects_escaping_folder() {
	let harness = Harness::new();
	let dir = tempdir().unwrap();
	let root = dir.path().join("root");
	std::fs::create_dir(&root).unwrap();

	let output = harness.run(["target", arg(&root), "Reader", "--folder", "../out"]);
	assert!(!output.status.success());
	assert!(!dir.path().join("out").exists());
}

#[test]
fn locate_uses_configured_roots() {
	let harness = Harness::new();
	let project = tempdir().unwrap();
	let src = project.path().join("src");
	std::fs::create_dir_all(src.join("io")).unwrap();
	touch(&src.join("io").join("Denoiser.h"));

	let config_dir = harness.home.path().join("config");
	std::fs::create_dir_all(&config_dir).unwrap();
	std::fs::write(
		config_dir.join("config.toml"),
		format!(
			"suggested_name = \"Denoiser\"\n\n[[roots]]\nname = \"include\"\npath = {:?}\n\n[[roots]]\nname = \"src\"\npath = {:?}\n",
			project.path().join("include").to_string_lossy(),
			src.to_string_lossy()
		),
	)
	.unwrap();

	let out = harness.stdout(["locate", "--preselected", arg(&src.join("io"))]);
	assert!(out.contains("src ("), "{out}");
	assert!(out.contains("name: Denoiser1"), "{out}");
}

#[test]
fn locate_without_roots_fails() {
	let harness = Harness::new();
	let output = harness.run(["locate"]);
	assert!(!output.status.success());
}
