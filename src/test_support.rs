use crate::error::Result;
use crate::invoke::{CommandOutput, CommandRunner, CommandSpec};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Create a git repository with `commits` commits on `main`.
///
/// Commit `n` has the subject `Commit n` (the first is `Initial commit`).
pub(crate) fn create_test_repo(commits: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    for i in 2..=commits {
        std::fs::write(path.join(format!("file{}.txt", i)), format!("File {}\n", i)).unwrap();
        git(path, &["add", "."]);
        git(path, &["commit", "-m", &format!("Commit {}", i)]);
    }

    temp_dir
}

/// Run git in `repo_dir` and return trimmed stdout, panicking on failure.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

type Matcher = Box<dyn Fn(&CommandSpec) -> bool>;
type Responder = Box<dyn Fn(&CommandSpec, Option<&str>) -> Result<CommandOutput>>;

struct Rule {
    matches: Matcher,
    respond: Responder,
}

/// Scripted [`CommandRunner`] for pipeline tests.
///
/// Rules are tried in insertion order; the first match answers. Unmatched
/// commands succeed with empty output, except `git format-patch`, which writes
/// a patch file for the current HEAD into the requested directory and prints
/// its path like git does. `git checkout <id>` moves the fake HEAD when it
/// succeeds, and responders receive that HEAD so they can fail per revision.
pub(crate) struct FakeRunner {
    rules: Vec<Rule>,
    calls: RefCell<Vec<CommandSpec>>,
    head: RefCell<Option<String>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self {
            rules: Vec::new(),
            calls: RefCell::new(Vec::new()),
            head: RefCell::new(None),
        }
    }

    pub(crate) fn on<M, R>(mut self, matches: M, respond: R) -> Self
    where
        M: Fn(&CommandSpec) -> bool + 'static,
        R: Fn(&CommandSpec, Option<&str>) -> Result<CommandOutput> + 'static,
    {
        self.rules.push(Rule {
            matches: Box::new(matches),
            respond: Box::new(respond),
        });
        self
    }

    /// Answer `git log` with the given newest-first lines.
    pub(crate) fn with_log(self, stdout: &str) -> Self {
        let stdout = stdout.to_string();
        self.on(
            |cmd| is_git(cmd, "log"),
            move |_, _| Ok(CommandOutput::ok(stdout.clone())),
        )
    }

    /// Fail every invocation of `program` while HEAD is at `revision`.
    pub(crate) fn failing_at(self, program: &str, revision: &str) -> Self {
        let program = program.to_string();
        let revision = revision.to_string();
        self.on(
            move |cmd| cmd.program == program,
            move |cmd, head| {
                if head == Some(revision.as_str()) {
                    Ok(CommandOutput::failed(1, format!("{} failed at {}", cmd.program, revision)))
                } else {
                    Ok(CommandOutput::ok(""))
                }
            },
        )
    }

    pub(crate) fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    /// Revisions passed to `git checkout`, in order.
    pub(crate) fn checkouts(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| is_git(c, "checkout"))
            .filter_map(|c| c.args.get(1).cloned())
            .collect()
    }

    /// Number of invocations of `program`.
    pub(crate) fn count(&self, program: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.program == program)
            .count()
    }

    /// Output directories requested by `git format-patch -o <dir>`.
    pub(crate) fn patch_dirs(&self) -> Vec<PathBuf> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| is_git(c, "format-patch"))
            .filter_map(|c| c.args.get(2).map(PathBuf::from))
            .collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput> {
        self.calls.borrow_mut().push(command.clone());
        let head = self.head.borrow().clone();

        let output = match self.rules.iter().find(|r| (r.matches)(command)) {
            Some(rule) => (rule.respond)(command, head.as_deref())?,
            None if is_git(command, "format-patch") => write_fake_patch(command, head.as_deref()),
            None => CommandOutput::ok(""),
        };

        if is_git(command, "checkout") && output.success() {
            *self.head.borrow_mut() = command.args.get(1).cloned();
        }

        Ok(output)
    }
}

pub(crate) fn is_git(cmd: &CommandSpec, subcommand: &str) -> bool {
    cmd.program == "git" && cmd.args.first().map(String::as_str) == Some(subcommand)
}

fn write_fake_patch(command: &CommandSpec, head: Option<&str>) -> CommandOutput {
    let Some(dir) = command.args.get(2) else {
        return CommandOutput::failed(128, "fatal: missing output directory");
    };
    let path = Path::new(dir).join(format!("0001-{}.patch", head.unwrap_or("HEAD")));
    match std::fs::write(&path, "From: Test User <test@example.com>\n") {
        Ok(()) => CommandOutput::ok(format!("{}\n", path.display())),
        Err(e) => CommandOutput::failed(128, format!("fatal: {}", e)),
    }
}
