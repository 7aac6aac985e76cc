//! ChunkReader tests: chunk boundaries, laziness, empty and missing sources.

use chunkcopy::{ChunkReader, CopyOpts, ErrorKind};
use std::fs;
use std::path::Path;

fn numbered_lines(n: usize, prefix: &str) -> String {
    (1..=n).map(|i| format!("{prefix} {i}\n")).collect()
}

fn reader_with_lines(lines: usize) -> ChunkReader {
    ChunkReader::new(&CopyOpts::with_lines_per_chunk(lines))
}

fn collect(reader: &ChunkReader, path: &Path) -> Vec<Vec<u8>> {
    reader
        .produce(path)
        .unwrap()
        .map(|c| c.unwrap().into_bytes())
        .collect()
}

// --- lines_per_chunk ---

#[test]
fn test_default_lines_per_chunk() {
    assert_eq!(CopyOpts::default().lines_per_chunk(), 8 * 1024 * 1024 / 100);
    assert_eq!(ChunkReader::default().lines_per_chunk(), 83_886);
}

#[test]
fn test_lines_per_chunk_never_zero() {
    let opts = CopyOpts {
        chunk_bytes: 10,
        avg_line_bytes: 100,
        ..CopyOpts::default()
    };
    assert_eq!(opts.lines_per_chunk(), 1);

    let opts = CopyOpts {
        chunk_bytes: 10,
        avg_line_bytes: 0,
        ..CopyOpts::default()
    };
    assert_eq!(opts.lines_per_chunk(), 10);
}

// --- chunk boundaries ---

#[test]
fn test_chunk_count_is_ceil_of_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("src.txt");
    fs::write(&path, numbered_lines(10, "Line")).unwrap();

    assert_eq!(collect(&reader_with_lines(3), &path).len(), 4);
    assert_eq!(collect(&reader_with_lines(5), &path).len(), 2);
    assert_eq!(collect(&reader_with_lines(10), &path).len(), 1);
    assert_eq!(collect(&reader_with_lines(11), &path).len(), 1);
    assert_eq!(collect(&reader_with_lines(1), &path).len(), 10);
}

#[test]
fn test_chunks_hold_whole_lines_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("src.txt");
    fs::write(&path, "a\nb\nc\nd\ne\n").unwrap();

    let chunks = collect(&reader_with_lines(2), &path);
    assert_eq!(
        chunks,
        vec![b"a\nb\n".to_vec(), b"c\nd\n".to_vec(), b"e\n".to_vec()]
    );
}

#[test]
fn test_small_file_single_chunk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.txt");
    fs::write(&path, "This is a small file.\n").unwrap();

    let chunks = collect(&ChunkReader::default(), &path);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0], b"This is a small file.\n");
}

#[test]
fn test_chunks_preserve_crlf_and_missing_final_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    let content = b"one\r\ntwo\nthree".to_vec();
    fs::write(&path, &content).unwrap();

    let joined: Vec<u8> = collect(&reader_with_lines(2), &path).concat();
    assert_eq!(joined, content);
}

#[test]
fn test_non_utf8_bytes_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bin.dat");
    let content = vec![0xff, 0xfe, b'\n', 0x00, 0x80, b'\n'];
    fs::write(&path, &content).unwrap();

    let joined: Vec<u8> = collect(&reader_with_lines(1), &path).concat();
    assert_eq!(joined, content);
}

#[test]
fn test_emitted_counts_chunks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("src.txt");
    fs::write(&path, numbered_lines(7, "Line")).unwrap();

    let mut chunks = reader_with_lines(3).produce(&path).unwrap();
    assert_eq!(chunks.emitted(), 0);
    while chunks.next().is_some() {}
    assert_eq!(chunks.emitted(), 3);
    // Fused: stays exhausted.
    assert!(chunks.next().is_none());
}

// --- empty source ---

#[test]
fn test_empty_file_yields_sentinel_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let chunks = collect(&ChunkReader::default(), &path);
    assert_eq!(chunks, vec![b"Empty File".to_vec()]);
}

#[test]
fn test_empty_file_sentinel_is_one_chunk_for_any_line_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    for lines in [1, 3, 5000] {
        assert_eq!(collect(&reader_with_lines(lines), &path).len(), 1);
    }
}

#[test]
fn test_empty_file_without_sentinel_yields_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let reader = ChunkReader::new(&CopyOpts {
        empty_sentinel: false,
        ..CopyOpts::default()
    });
    assert!(collect(&reader, &path).is_empty());
}

#[test]
fn test_sentinel_not_used_for_non_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("src.txt");
    fs::write(&path, "Line 1\n").unwrap();

    let reader = ChunkReader::new(&CopyOpts {
        empty_sentinel: true,
        ..CopyOpts::default()
    });
    assert_eq!(collect(&reader, &path), vec![b"Line 1\n".to_vec()]);
}

// --- errors ---

#[test]
fn test_blank_path_fails_eagerly() {
    let reader = ChunkReader::default();
    for p in ["", "   ", "\t"] {
        let err = reader.produce(p).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_missing_source_fails_on_first_pull() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    // Producing does no I/O.
    let mut chunks = ChunkReader::default().produce(&path).unwrap();
    let err = chunks.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceNotFound);
    assert!(chunks.next().is_none());
}

#[test]
fn test_directory_source_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let mut chunks = ChunkReader::default().produce(dir.path()).unwrap();
    let err = chunks.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceNotFound);
}
