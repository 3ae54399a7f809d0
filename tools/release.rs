//! Release helper for sovran-typedict.
//!
//! Bumps the version in Cargo.toml, prepends the commit log to CHANGELOG.md,
//! then tags, pushes and publishes after confirmation. Pass `--dry-run` to
//! print every command instead of running it.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::Command;
use toml_edit::{value, DocumentMut};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const MANIFEST: &str = "Cargo.toml";
const CHANGELOG: &str = "CHANGELOG.md";

struct Release {
    version: String,
    dry_run: bool,
}

impl Release {
    fn run(&self, program: &str, args: &[&str], failure: &str) -> Result<()> {
        println!("Executing: {} {}", program, args.join(" "));
        if self.dry_run {
            return Ok(());
        }
        let status = Command::new(program).args(args).status()?;
        if !status.success() {
            return Err(failure.into());
        }
        Ok(())
    }

    fn write(&self, path: &str, contents: &str) -> Result<()> {
        if self.dry_run {
            println!("Would write {} ({} bytes)", path, contents.len());
            return Ok(());
        }
        fs::write(path, contents)?;
        println!("Updated {}", path);
        Ok(())
    }

    fn bump_manifest(&self, doc: &mut DocumentMut) -> Result<()> {
        doc["package"]["version"] = value(self.version.as_str());
        self.write(MANIFEST, &doc.to_string())
    }

    fn update_changelog(&self, notes: &str) -> Result<()> {
        let existing = fs::read_to_string(CHANGELOG).unwrap_or_default();
        let section = format!("## v{}\n\n{}\n\n", self.version, notes.trim_end());
        self.write(CHANGELOG, &format!("{}{}", section, existing))
    }

    fn tag(&self) -> Result<()> {
        let tag = format!("v{}", self.version);
        let message = format!("Bump version to {}", self.version);
        self.run(
            "git",
            &["add", MANIFEST, "Cargo.lock", CHANGELOG],
            "Failed to stage release files",
        )?;
        self.run("git", &["commit", "-m", &message], "Failed to commit version bump")?;
        self.run(
            "git",
            &["tag", "-a", &tag, "-m", &format!("Version {}", self.version)],
            "Failed to create tag",
        )?;
        self.run("git", &["push"], "Failed to push commits")?;
        self.run("git", &["push", "--tags"], "Failed to push tags")
    }
}

fn git_output(args: &[&str]) -> Result<Option<String>> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8(output.stdout)?.trim().to_string()))
}

fn previous_tag() -> Result<Option<String>> {
    Ok(git_output(&["describe", "--tags", "--abbrev=0"])?.filter(|tag| !tag.is_empty()))
}

fn release_notes(previous: Option<&str>) -> Result<String> {
    let range = previous.map(|tag| format!("{}..HEAD", tag));
    let mut args = vec!["log", "--pretty=format:- %s"];
    if let Some(range) = range.as_deref() {
        args.push(range);
    }
    Ok(git_output(&args)?.unwrap_or_default())
}

fn prompt(message: &str) -> Result<String> {
    print!("{} ", message);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn confirm(message: &str) -> Result<bool> {
    Ok(prompt(&format!("{} (y/n):", message))?.eq_ignore_ascii_case("y"))
}

fn main() -> Result<()> {
    let dry_run = env::args().any(|arg| arg == "--dry-run");

    let mut doc = fs::read_to_string(MANIFEST)?.parse::<DocumentMut>()?;
    let current = doc["package"]["version"]
        .as_str()
        .ok_or("Could not find version in Cargo.toml")?
        .to_string();

    println!("Current version is: {}", current);
    let version = prompt("Enter new version:")?;
    if version.is_empty() {
        return Err("Version cannot be empty".into());
    }
    if version == current {
        return Err(format!("Version {} is already current", version).into());
    }

    let release = Release { version, dry_run };
    if !confirm(&format!("Ready to release version {}?", release.version))? {
        println!("Release aborted.");
        return Ok(());
    }

    let previous = previous_tag()?;
    println!("Previous tag: {}", previous.as_deref().unwrap_or("None"));
    let notes = release_notes(previous.as_deref())?;
    if notes.is_empty() && !confirm("No commits since the previous tag. Continue?")? {
        println!("Release aborted.");
        return Ok(());
    }

    release.bump_manifest(&mut doc)?;
    release.run("cargo", &["check"], "Failed to update Cargo.lock")?;
    release.update_changelog(&notes)?;
    release.tag()?;

    if confirm("Publish to crates.io?")? {
        release.run("cargo", &["publish"], "Failed to publish to crates.io")?;
    } else {
        println!("Skipping crates.io publishing.");
    }

    if confirm("Create GitHub release?")? {
        let tag = format!("v{}", release.version);
        release.run(
            "gh",
            &["release", "create", &tag, "--title", &tag, "--notes", &notes],
            "Failed to create GitHub release",
        )?;
    } else {
        println!("Skipping GitHub release creation.");
    }

    println!("Released version {}", release.version);
    Ok(())
}
