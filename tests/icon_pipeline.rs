use appicon_tools::icon::{self, IconConfig};
use std::path::PathBuf;

#[test]
fn generates_master_and_six_sized_variants() {
    let dir = tempfile::tempdir().unwrap();
    let config = IconConfig {
        output_dir: dir.path().to_path_buf(),
        ..IconConfig::default()
    };

    let mut seen: Vec<PathBuf> = Vec::new();
    let report = icon::generate(&config, |p| seen.push(p.to_path_buf())).unwrap();

    assert_eq!(report.written.len(), 7);
    assert_eq!(report.written, seen);

    let mut on_disk: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    on_disk.sort();
    assert_eq!(
        on_disk,
        vec![
            "AppIcon.png",
            "AppIcon_128x128.png",
            "AppIcon_16x16.png",
            "AppIcon_256x256.png",
            "AppIcon_32x32.png",
            "AppIcon_512x512.png",
            "AppIcon_64x64.png",
        ]
    );

    let master = image::open(dir.path().join("AppIcon.png")).unwrap();
    assert_eq!((master.width(), master.height()), (1024, 1024));

    for s in [16u32, 32, 64, 128, 256, 512] {
        let path = dir.path().join(format!("AppIcon_{}x{}.png", s, s));
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (s, s), "{}", path.display());
    }
}

#[test]
fn custom_base_name_and_sizes_are_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let config = IconConfig {
        output_dir: dir.path().join("nested"),
        base_name: "Icon".to_string(),
        sizes: vec![48],
        gloss: true,
        ..IconConfig::default()
    };

    let report = icon::generate(&config, |_| {}).unwrap();
    assert_eq!(
        report.written,
        vec![
            dir.path().join("nested").join("Icon.png"),
            dir.path().join("nested").join("Icon_48x48.png"),
        ]
    );
    let small = image::open(&report.written[1]).unwrap();
    assert_eq!((small.width(), small.height()), (48, 48));
}
