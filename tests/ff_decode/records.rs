use std::thread;

use log::info;
use mqdb_rs::prelude::*;

use mqdb_benches::ContainerBuilder;

use crate::builder::write_temp;

fn sample() -> ContainerBuilder {
	ContainerBuilder::new()
		.named("DLG_HIRE_LEADER.DLG", 100, b"[dialog]")
		.named("G000UU0001.PNG", 101, &[0x89, b'P', b'N', b'G'])
		.deleted(102, b"gone")
		.name("OLD.PNG", 102)
		.name("LOST.PNG", 4000)
}

#[test_log::test]
fn read_by_name_and_id() {
	let path = write_temp(&sample(), "read-by-name");
	let ff = FfFile::open(&path).unwrap();

	let mut data = Vec::new();
	assert!(ff.record_data_by_name("DLG_HIRE_LEADER.DLG", &mut data).unwrap());
	assert_eq!(data, b"[dialog]");

	assert!(ff.record_data(101, &mut data).unwrap());
	assert_eq!(data, [0x89, b'P', b'N', b'G']);

	// deleted records keep their table of contents entry
	assert!(ff.record_data(102, &mut data).unwrap());
	assert_eq!(data, b"gone");

	std::fs::remove_file(path).unwrap();
}

#[test_log::test]
fn skipped_names_are_not_listed() {
	let path = write_temp(&sample(), "skipped-names");
	let ff = FfFile::open(&path).unwrap();

	assert_eq!(ff.names(), vec!["DLG_HIRE_LEADER.DLG", "G000UU0001.PNG"]);
	assert_eq!(ff.name_list().entries().len(), 4);

	let mut data = Vec::new();
	assert!(!ff.record_data_by_name("OLD.PNG", &mut data).unwrap());
	assert!(!ff.record_data_by_name("LOST.PNG", &mut data).unwrap());
	assert!(data.is_empty());

	for entry in ff.name_list().skipped() {
		info!("skipped {:?}: {:?}", entry.name, entry.resolution);
	}

	std::fs::remove_file(path).unwrap();
}

#[test_log::test]
fn file_and_memory_agree() {
	let container = sample();
	let path = write_temp(&container, "file-and-memory");

	let from_disk = FfFile::open(&path).unwrap();
	let from_memory = FfFile::from_bytes(&container.build()).unwrap();

	assert_eq!(from_disk.names(), from_memory.names());
	for name in from_disk.names() {
		let (mut a, mut b) = (Vec::new(), Vec::new());
		from_disk.record_data_by_name(&name, &mut a).unwrap();
		from_memory.record_data_by_name(&name, &mut b).unwrap();
		assert_eq!(a, b, "{name}");
	}

	std::fs::remove_file(path).unwrap();
}

#[test_log::test]
fn concurrent_reads_from_disk() {
	let mut container = ContainerBuilder::new();
	for id in 10..42u32 {
		container = container.named(&format!("RECORD{id:03}"), id, &id.to_le_bytes().repeat(id as usize));
	}
	let path = write_temp(&container, "concurrent");
	let ff = FfFile::open(&path).unwrap();

	thread::scope(|scope| {
		for id in 10..42u32 {
			let ff = &ff;
			scope.spawn(move || {
				let mut data = Vec::new();
				assert!(ff.record_data_by_name(&format!("RECORD{id:03}"), &mut data).unwrap());
				assert_eq!(data, id.to_le_bytes().repeat(id as usize));
			});
		}
	});

	std::fs::remove_file(path).unwrap();
}

#[test_log::test]
fn file_removed_after_open() {
	let path = write_temp(&sample(), "removed");
	let ff = FfFile::open_with(&path, FfOptions::metadata_only()).unwrap();
	std::fs::remove_file(&path).unwrap();

	// metadata stays available, payload reads fail on open
	assert!(ff.find_by_name("DLG_HIRE_LEADER.DLG").is_some());

	let mut data = Vec::new();
	let err = ff.record_data(100, &mut data).unwrap_err();
	assert!(matches!(err, MqdbError::Open { .. }));
}
