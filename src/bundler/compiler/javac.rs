//! External `javac` invocation.

use super::{CompileRequest, Compiler, tool_detection::locate_javac};
use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::CompilerSettings,
};
use path_absolutize::Absolutize;
use std::{
    ffi::{OsStr, OsString},
    io::{self, Write},
    path::PathBuf,
    process::Command,
};

/// Compiles sources by running the JDK's `javac`.
#[derive(Debug, Clone)]
pub struct Javac {
    executable: PathBuf,
}

impl Javac {
    /// Uses the given executable without checking it.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Locates the compiler from settings, `JAVA_HOME`, or `PATH`.
    pub fn locate(settings: &CompilerSettings) -> Result<Self> {
        Ok(Self::new(locate_javac(settings.javac.as_ref())?))
    }

    /// Builds the argument list for one invocation.
    ///
    /// `-classpath` is only passed when the request carries a classpath;
    /// an absent classpath and an empty one resolve differently in javac.
    pub fn arguments(request: &CompileRequest<'_>) -> Result<Vec<OsString>> {
        let output_dir = request
            .output_dir
            .absolutize()
            .fs_context("resolving output directory", request.output_dir)?;

        let mut args: Vec<OsString> = vec![
            "-d".into(),
            output_dir.as_os_str().to_os_string(),
            "-encoding".into(),
            request.settings.encoding.clone().into(),
        ];

        if let Some(release) = request.settings.release {
            args.push("--release".into());
            args.push(release.to_string().into());
        }

        if let Some(classpath) = request.classpath {
            args.push("-classpath".into());
            args.push(classpath.to_os_string());
        }

        args.extend(request.sources.iter().map(|s| s.as_os_str().to_os_string()));
        Ok(args)
    }

    /// Writes `args` as a javac `@argfile`, one quoted argument per line.
    ///
    /// Source lists and classpaths can exceed the process command line limit
    /// (about 32K characters on Windows), so only `@<file>` is passed to javac.
    pub fn write_argfile<W: Write>(args: &[OsString], out: &mut W) -> io::Result<()> {
        for arg in args {
            out.write_all(&argfile_quote(arg))?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

/// Quotes one argument for a javac argfile.
///
/// Inside double quotes javac treats `\` as an escape, so backslashes
/// (Windows separators) and quotes are escaped. Bytes are written as-is.
fn argfile_quote(arg: &OsStr) -> Vec<u8> {
    let bytes = arg.as_encoded_bytes();
    let mut quoted = Vec::with_capacity(bytes.len() + 2);
    quoted.push(b'"');
    for &byte in bytes {
        if matches!(byte, b'"' | b'\\') {
            quoted.push(b'\\');
        }
        quoted.push(byte);
    }
    quoted.push(b'"');
    quoted
}

impl Compiler for Javac {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<()> {
        let args = Self::arguments(request)?;

        let mut argfile = tempfile::Builder::new()
            .prefix("javac-")
            .suffix(".args")
            .tempfile()
            .fs_context("creating javac argument file", &std::env::temp_dir())?;
        Self::write_argfile(&args, argfile.as_file_mut())
            .fs_context("writing javac argument file", argfile.path())?;

        let mut at_file = OsString::from("@");
        at_file.push(argfile.path());
        log::debug!(
            "Running {} {} ({} arguments)",
            self.executable.display(),
            at_file.to_string_lossy(),
            args.len()
        );

        let output = Command::new(&self.executable)
            .arg(&at_file)
            .output()
            .map_err(|e| Error::CommandFailed {
                command: self.executable.display().to_string(),
                error: e,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() {
            let mut diagnostics = stderr.into_owned();
            if !stdout.trim().is_empty() {
                if !diagnostics.is_empty() && !diagnostics.ends_with('\n') {
                    diagnostics.push('\n');
                }
                diagnostics.push_str(&stdout);
            }
            if diagnostics.trim().is_empty() {
                diagnostics = format!("javac exited with code {:?}", output.status.code());
            }
            return Err(Error::Compilation { diagnostics });
        }

        // Warnings (deprecation, unchecked) still arrive on stderr
        if !stderr.trim().is_empty() {
            log::warn!("javac: {}", stderr.trim_end());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};

    fn request<'a>(
        sources: &'a [PathBuf],
        output_dir: &'a Path,
        classpath: Option<&'a OsStr>,
        settings: &'a CompilerSettings,
    ) -> CompileRequest<'a> {
        CompileRequest {
            sources,
            output_dir,
            classpath,
            settings,
        }
    }

    fn position(args: &[OsString], flag: &str) -> Option<usize> {
        args.iter().position(|a| a == flag)
    }

    #[test]
    fn no_classpath_option_without_classpath() {
        let settings = CompilerSettings::default();
        let sources = vec![PathBuf::from("Main.java")];
        let args = Javac::arguments(&request(&sources, Path::new("out"), None, &settings)).unwrap();

        assert!(position(&args, "-classpath").is_none());
        assert_eq!(args.last().unwrap(), "Main.java");
    }

    #[test]
    fn empty_classpath_is_passed_through() {
        let settings = CompilerSettings::default();
        let sources = vec![PathBuf::from("Main.java")];
        let empty = OsStr::new("");
        let args = Javac::arguments(&request(&sources, Path::new("out"), Some(empty), &settings))
            .unwrap();

        let at = position(&args, "-classpath").unwrap();
        assert_eq!(args[at + 1], "");
    }

    #[test]
    fn output_directory_is_absolute() {
        let settings = CompilerSettings::default();
        let args = Javac::arguments(&request(&[], Path::new("out"), None, &settings)).unwrap();

        let at = position(&args, "-d").unwrap();
        assert!(Path::new(&args[at + 1]).is_absolute());
        assert!(Path::new(&args[at + 1]).ends_with("out"));
    }

    #[test]
    fn encoding_and_release() {
        let settings = CompilerSettings {
            encoding: "ISO-8859-1".into(),
            release: Some(17),
            ..Default::default()
        };
        let classpath = OsStr::new("a.jar");
        let args = Javac::arguments(&request(&[], Path::new("out"), Some(classpath), &settings))
            .unwrap();

        let enc = position(&args, "-encoding").unwrap();
        assert_eq!(args[enc + 1], "ISO-8859-1");
        let rel = position(&args, "--release").unwrap();
        assert_eq!(args[rel + 1], "17");
        let cp = position(&args, "-classpath").unwrap();
        assert_eq!(args[cp + 1], "a.jar");
    }

    #[test]
    fn unspawnable_compiler_is_command_failure() {
        let dir = tempfile::tempdir().unwrap();
        let javac = Javac::new(dir.path().join("missing-javac"));
        let settings = CompilerSettings::default();
        let err = javac
            .compile(&request(&[], dir.path(), None, &settings))
            .unwrap_err();
        assert!(matches!(err, Error::CommandFailed { .. }));
    }

    #[test]
    fn argfile_escapes_quotes_and_backslashes() {
        let args = vec![
            OsString::from("-d"),
            OsString::from("C:\\out dir"),
            OsString::from("say \"hi\".java"),
        ];
        let mut out = Vec::new();
        Javac::write_argfile(&args, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"-d\"\n\"C:\\\\out dir\"\n\"say \\\"hi\\\".java\"\n"
        );
    }

    /// Stand-in compiler that fails unless it receives a single `@argfile`,
    /// and keeps a copy of that file.
    #[cfg(unix)]
    fn argfile_recorder(dir: &Path) -> (PathBuf, PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let copy = dir.join("received.args");
        let script = dir.join("recording-javac");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\n[ $# -eq 1 ] || exit 3\ncase \"$1\" in @*) ;; *) exit 4 ;; esac\ncp \"${{1#@}}\" '{}'\n",
                copy.display()
            ),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        (script, copy)
    }

    #[cfg(unix)]
    #[test]
    fn huge_source_list_goes_through_argfile() {
        let dir = tempfile::tempdir().unwrap();
        let (script, copy) = argfile_recorder(dir.path());

        let long_dir = "d".repeat(120);
        let sources: Vec<PathBuf> = (0..30_000)
            .map(|i| Path::new(&long_dir).join(format!("Source{i}.java")))
            .collect();
        let classpath = OsString::from("x".repeat(200_000));
        let settings = CompilerSettings::default();
        let out = dir.path().join("out");

        Javac::new(&script)
            .compile(&request(&sources, &out, Some(classpath.as_os_str()), &settings))
            .unwrap();

        let received = fs::read_to_string(&copy).unwrap();
        let lines: Vec<&str> = received.lines().collect();
        assert_eq!(lines.len(), 4 + 2 + sources.len());
        assert_eq!(
            lines.last().copied(),
            Some(format!("\"{}/Source29999.java\"", long_dir).as_str())
        );
    }

    #[cfg(unix)]
    #[test]
    fn single_source_argfile() {
        let dir = tempfile::tempdir().unwrap();
        let (script, copy) = argfile_recorder(dir.path());
        let settings = CompilerSettings::default();
        let sources = vec![PathBuf::from("Main.java")];

        Javac::new(&script)
            .compile(&request(&sources, dir.path(), None, &settings))
            .unwrap();

        let received = fs::read_to_string(&copy).unwrap();
        assert!(received.starts_with("\"-d\"\n"));
        assert!(received.ends_with("\"-encoding\"\n\"UTF-8\"\n\"Main.java\"\n"));
    }
}
