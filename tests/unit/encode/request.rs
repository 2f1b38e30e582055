use std::ffi::OsString;

use super::*;

#[test]
fn frame_names_are_zero_padded_and_lexicographically_ordered() {
    assert_eq!(frame_file_name(0), "frame000.png");
    assert_eq!(frame_file_name(7), "frame007.png");
    assert_eq!(frame_file_name(42), "frame042.png");
    assert_eq!(frame_file_name(999), "frame999.png");

    let names: Vec<String> = (0..MAX_FRAMES as u32).map(frame_file_name).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn mp4_request_is_the_fixed_codec_pair() {
    let req = EncodeRequest::mp4(1);
    assert_eq!(req.codec, "libx264");
    assert_eq!(req.pixel_format, "yuv420p");
    assert_eq!(req.input_pattern, "frame%03d.png");
    assert_eq!(req.output_name, "output.mp4");
    assert_eq!(req.frame_rate, 1);
    req.validate().unwrap();
}

#[test]
fn validation_catches_bad_values() {
    assert!(EncodeRequest::mp4(0).validate().is_err());

    let mut req = EncodeRequest::mp4(1);
    req.input_pattern.clear();
    assert!(req.validate().is_err());

    let mut req = EncodeRequest::mp4(1);
    req.codec.clear();
    assert!(req.validate().is_err());

    let mut req = EncodeRequest::mp4(1);
    req.output_name.clear();
    assert!(req.validate().is_err());
}

#[test]
fn args_place_framerate_before_input_and_output_last() {
    let req = EncodeRequest::mp4(1);
    let args = req.to_args(Path::new("/stage"));

    let framerate = args.iter().position(|a| a == "-framerate").unwrap();
    let input = args.iter().position(|a| a == "-i").unwrap();
    assert!(framerate < input);
    assert_eq!(args[framerate + 1], OsString::from("1"));

    assert!(args.contains(&OsString::from("-an")));
    assert!(
        args.last()
            .unwrap()
            .to_string_lossy()
            .ends_with("output.mp4")
    );
}
