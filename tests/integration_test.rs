//! Integration tests for a full sort + crop + convert workflow

extern crate std;

use std::fs;
use std::path::Path;

use image::{GenericImageView, GrayImage, Luma};
use tempfile::TempDir;

use miaskit::{CropSettings, DatasetGeometry, MiasError, MiasKit, OutputTargets};

fn write_mammogram(folder: &Path, name: &str, seed: u32) {
    let image = GrayImage::from_fn(256, 256, |x, y| Luma([((x ^ y) + seed) as u8]));
    image.save(folder.join(name)).unwrap();
}

fn listing(folder: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(folder).unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

#[test]
fn test_complete_crop_workflow() {
    let root = TempDir::new().unwrap();
    let images = root.path().join("images");
    fs::create_dir(&images).unwrap();

    // Written out of order on purpose; pairing follows the sorted listing
    write_mammogram(&images, "mdb005.png", 5);
    write_mammogram(&images, "mdb001.png", 1);
    write_mammogram(&images, "mdb003.png", 3);
    write_mammogram(&images, "mdb002.png", 2);
    fs::write(images.join("mdb004.png"), b"truncated").unwrap();

    let metadata = root.path().join("mias.csv");
    fs::write(&metadata, "\
REFNUM,BG,CLASS,SEVERITY,X,Y,RADIUS
mdb001,G,CIRC,0,128,128,40
mdb002,G,CIRC,1,60,200,30
mdb003,D,NORM,2,,,
mdb004,G,CIRC,0,100,100,20
mdb005,F,NORM,2,7,9,
").unwrap();

    let out = root.path().join("out");
    let targets = OutputTargets::new(out.join("normal"), out.join("benign"), out.join("malignant"), out.join("tumor"));
    let settings = CropSettings {
        geometry: DatasetGeometry { default_size: 64.0, normal_center: None },
        create_dirs: true,
        show_progress: false,
    };

    let kit = MiasKit::new(Some(root.path().join("miaskit.log").to_str().unwrap()))
        .unwrap()
        .with_progress(false);

    let sorted = kit.sort(&images).unwrap();
    std::assert_eq!(sorted.files, vec!["mdb001.png", "mdb002.png", "mdb003.png", "mdb004.png", "mdb005.png"]);

    let report = kit.crop(&images, &metadata, true, targets.clone(), settings).unwrap();

    std::assert_eq!(report.total_rows, 5);
    std::assert_eq!(report.cropped, 3);
    std::assert_eq!(report.skipped, 1);
    std::assert_eq!(report.failure_count(), 1);
    std::assert_eq!(report.failures[0].row, 4);
    std::assert!(matches!(report.failures[0].error, MiasError::DecodeFailed { .. }));

    std::assert_eq!(listing(&targets.benign), vec!["mdb001_Benign_cropped.png"]);
    std::assert_eq!(listing(&targets.malignant), vec!["mdb002_Malignant_cropped.png"]);
    std::assert_eq!(listing(&targets.tumor), vec!["mdb001_Benign_cropped.png", "mdb002_Malignant_cropped.png"]);
    std::assert_eq!(listing(&targets.normal), vec!["mdb003_Normal_cropped.png"]);

    let benign = image::open(targets.benign.join("mdb001_Benign_cropped.png")).unwrap();
    std::assert_eq!(benign.dimensions(), (40, 40));
    let normal = image::open(targets.normal.join("mdb003_Normal_cropped.png")).unwrap();
    std::assert_eq!(normal.dimensions(), (64, 64));

    let log = fs::read_to_string(root.path().join("miaskit.log")).unwrap();
    std::assert!(log.contains("Crop summary"));
    std::assert!(log.contains("3 of 5 rows cropped"));
}

#[test]
fn test_row_count_mismatch_stops_before_any_output() {
    let root = TempDir::new().unwrap();
    let images = root.path().join("images");
    fs::create_dir(&images).unwrap();
    write_mammogram(&images, "mdb001.png", 1);
    write_mammogram(&images, "mdb002.png", 2);

    let metadata = root.path().join("mias.csv");
    fs::write(&metadata, "REFNUM,BG,CLASS,SEVERITY,X,Y,RADIUS\nmdb001,G,CIRC,0,128,128,40\n").unwrap();

    let out = root.path().join("out");
    let targets = OutputTargets::new(out.join("n"), out.join("b"), out.join("m"), out.join("t"));
    let settings = CropSettings { create_dirs: true, show_progress: false, ..Default::default() };

    let kit = MiasKit::new(Some(root.path().join("miaskit.log").to_str().unwrap())).unwrap().with_progress(false);
    let result = kit.crop(&images, &metadata, true, targets.clone(), settings);

    std::assert!(matches!(result, Err(MiasError::InvalidInput(_))));
    std::assert!(listing(&targets.benign).is_empty());
}

#[test]
fn test_convert_then_sort_keeps_stems() {
    let root = TempDir::new().unwrap();
    let images = root.path().join("images");
    let converted = root.path().join("converted");
    fs::create_dir(&images).unwrap();
    fs::create_dir(&converted).unwrap();
    write_mammogram(&images, "mdb002.png", 2);
    write_mammogram(&images, "mdb001.png", 1);

    let kit = MiasKit::new(Some(root.path().join("miaskit.log").to_str().unwrap())).unwrap().with_progress(false);
    let report = kit.convert(&images, Some(&converted), ".tif").unwrap();

    std::assert_eq!(report.converted, 2);
    std::assert_eq!(kit.sort(&converted).unwrap().files, vec!["mdb001.tif", "mdb002.tif"]);
}
