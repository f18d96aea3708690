use super::*;

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![255, 0, 0, 255, 64, 0, 0, 128],
        premultiplied: true,
    }
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("proc2d-screenshot-{}", std::process::id()))
        .join(name)
}

#[test]
fn extension_matching_is_case_insensitive() {
    assert_eq!(ScreenshotFormat::from_path(Path::new("a.PNG")), ScreenshotFormat::Png);
    assert_eq!(ScreenshotFormat::from_path(Path::new("a.Jpg")), ScreenshotFormat::Jpeg);
    assert_eq!(ScreenshotFormat::from_path(Path::new("a.jpeg")), ScreenshotFormat::Jpeg);
    assert_eq!(ScreenshotFormat::from_path(Path::new("a.GIF")), ScreenshotFormat::Gif);
}

#[test]
fn unknown_extension_falls_back_to_png() {
    assert_eq!(ScreenshotFormat::from_path(Path::new("a.bmp")), ScreenshotFormat::Png);
    assert_eq!(ScreenshotFormat::from_path(Path::new("noext")), ScreenshotFormat::Png);
}

#[test]
fn straight_rgba_unpremultiplies() {
    let img = straight_rgba(&frame()).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [128, 0, 0, 128]);
}

#[test]
fn short_buffers_are_an_encode_error() {
    let mut f = frame();
    f.data.truncate(4);
    let err = straight_rgba(&f).unwrap_err();
    assert!(err.to_string().starts_with("encode error:"));
}

#[test]
fn saves_every_supported_format_and_unknown_as_png() {
    for name in ["shot.png", "shot.JPG", "shot.gif", "shot.weird"] {
        let path = temp_path(name);
        save_frame(&frame(), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2, 1));
        if name.ends_with(".weird") {
            assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);
        }
        let _ = std::fs::remove_file(&path);
    }
}
