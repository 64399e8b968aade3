use super::*;
use crate::render::backend::FrameRGBA;
use image::AnimationDecoder as _;

fn write_frame(dir: &Path, n: u32, rgba: [u8; 4]) -> PathBuf {
    let path = dir.join(format!("{n:03}.png"));
    FrameRGBA {
        width: 4,
        height: 3,
        data: rgba.repeat(12),
        premultiplied: false,
    }
    .save_png(&path)
    .unwrap();
    path
}

#[test]
fn encodes_looping_gif_with_all_frames() {
    let tmp = tempfile::tempdir().unwrap();
    let frames = vec![
        write_frame(tmp.path(), 1, [255, 0, 0, 255]),
        write_frame(tmp.path(), 2, [0, 0, 255, 255]),
    ];
    let out = tmp.path().join("animation.gif");
    let produced = GifEncoder::new(10).encode(&frames, &out).unwrap();
    assert_eq!(produced, out);

    let file = std::io::BufReader::new(File::open(&out).unwrap());
    let decoded = image::codecs::gif::GifDecoder::new(file)
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(decoded.len(), 2);
    let (num, den) = decoded[0].delay().numer_denom_ms();
    assert_eq!(num / den, 100);
}

#[test]
fn mismatched_sizes_fail() {
    let tmp = tempfile::tempdir().unwrap();
    let a = write_frame(tmp.path(), 1, [0, 0, 0, 255]);
    let b = tmp.path().join("002.png");
    FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: false,
    }
    .save_png(&b)
    .unwrap();
    let err = GifEncoder::new(10)
        .encode(&[a, b], &tmp.path().join("a.gif"))
        .unwrap_err();
    assert!(matches!(err, AnimatorError::Encoding(_)));
}

#[test]
fn unreadable_frame_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let bogus = tmp.path().join("001.png");
    std::fs::write(&bogus, b"not a png").unwrap();
    assert!(
        GifEncoder::new(10)
            .encode(&[bogus], &tmp.path().join("a.gif"))
            .is_err()
    );
}
