//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::{
    fs::{self, File},
    io::Read,
    path::{Path, PathBuf},
};

/// Shell stand-in for javac: expands a single `@argfile`, writes
/// `<out>/<Name>.class` for every `<Name>.java` argument and fails on sources
/// containing `SYNTAX ERROR`.
pub const FAKE_JAVAC: &str = r#"#!/bin/sh
if [ $# -eq 1 ] && [ "${1#@}" != "$1" ]; then
  argfile="${1#@}"
  set --
  while IFS= read -r line; do
    line="${line#\"}"
    set -- "$@" "${line%\"}"
  done < "$argfile"
fi
out=""
files=""
while [ $# -gt 0 ]; do
  case "$1" in
    -d) out="$2"; shift 2 ;;
    -encoding|-classpath|--release) shift 2 ;;
    *) files="$files $1"; shift ;;
  esac
done
for f in $files; do
  if grep -q "SYNTAX ERROR" "$f"; then
    echo "$f:1: error: illegal start of type" >&2
    exit 1
  fi
done
for f in $files; do
  name=$(basename "$f" .java)
  printf 'compiled %s' "$name" > "$out/$name.class"
done
"#;

/// Installs [`FAKE_JAVAC`] as an executable inside `dir`.
#[cfg(unix)]
pub fn install_fake_javac(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-javac");
    fs::write(&path, FAKE_JAVAC).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Writes a small project: `proj/Main.java` and `proj/Helper.java`.
pub fn write_project(root: &Path) -> PathBuf {
    let src = root.join("proj");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("Main.java"),
        "public class Main {\n    public static void main(String[] args) {\n        System.out.println(Helper.greeting());\n    }\n}\n",
    )
    .unwrap();
    fs::write(
        src.join("Helper.java"),
        "class Helper {\n    static String greeting() { return \"hi\"; }\n}\n",
    )
    .unwrap();
    src
}

/// Entry names of a jar, in archive order.
pub fn entry_names(jar: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(jar).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

/// Names and contents of every entry, sorted by name.
pub fn entry_contents(jar: &Path) -> Vec<(String, Vec<u8>)> {
    let mut archive = zip::ZipArchive::new(File::open(jar).unwrap()).unwrap();
    let mut contents: Vec<_> = (0..archive.len())
        .map(|i| {
            let mut file = archive.by_index(i).unwrap();
            let mut data = Vec::new();
            file.read_to_end(&mut data).unwrap();
            (file.name().to_string(), data)
        })
        .collect();
    contents.sort();
    contents
}
