use std::{io::Cursor, path::PathBuf};

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_bannerkit")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "bannerkit.exe"
            } else {
                "bannerkit"
            });
            p
        })
}

fn write_png(path: &std::path::Path, width: u32, height: u32) {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 200]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(path, &buf).unwrap();
}

#[test]
fn cli_writes_composite() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let out_path = dir.join("out.png");
    let _ = std::fs::remove_file(&out_path);
    write_png(&dir.join("like.png"), 8, 8);
    write_png(&dir.join("dislike.png"), 8, 8);
    write_png(&dir.join("icon.png"), 16, 16);

    let p = |name: &str| dir.join(name).to_string_lossy().replace('\\', "/");
    let json = format!(
        r#"{{
  "background": {{ "file": "{}", "width": 900, "height": 300 }},
  "bgRgba": {{ "top": [0, 153, 153, 255], "bottom": [192, 192, 192, 255] }},
  "like": {{ "file": "{}", "width": 8, "height": 8 }},
  "dislike": {{ "file": "{}", "width": 8, "height": 8 }},
  "output": {{ "file": "{}", "format": "png" }},
  "likeIcon": [ {{ "name": "a", "file": "{}" }} ],
  "dislikeIcon": [ {{ "file": "{}" }} ]
}}"#,
        p("bg.png"),
        p("like.png"),
        p("dislike.png"),
        p("out.png"),
        p("icon.png"),
        p("icon.png"),
    );
    let req_path = dir.join("request.json");
    std::fs::write(&req_path, json).unwrap();

    let status = std::process::Command::new(exe())
        .arg("-j")
        .arg(&req_path)
        .status()
        .unwrap();

    assert!(status.success());
    let out = image::open(&out_path).unwrap();
    assert_eq!((out.width(), out.height()), (900, 300));
}

#[test]
fn cli_without_json_flag_fails_with_usage() {
    let out = std::process::Command::new(exe()).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage"), "{stderr}");
}

#[test]
fn cli_bad_config_exits_non_zero() {
    let dir = PathBuf::from("target").join("cli_smoke_bad");
    std::fs::create_dir_all(&dir).unwrap();
    let req_path = dir.join("request.json");
    std::fs::write(&req_path, "{ not json").unwrap();

    let out = std::process::Command::new(exe())
        .arg("--json")
        .arg(&req_path)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("config error"));
}
