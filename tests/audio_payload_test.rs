use keyspot::domain::{AudioFormat, AudioPayload};

#[test]
fn given_wav_filename_when_inferring_format_then_maps_to_wav() {
    assert_eq!(AudioFormat::from_filename("clip.wav"), AudioFormat::Wav);
    assert_eq!(AudioFormat::from_filename("CLIP.WAV"), AudioFormat::Wav);
}

#[test]
fn given_mp3_filename_when_inferring_format_then_maps_to_mpeg() {
    assert_eq!(AudioFormat::from_filename("song.mp3"), AudioFormat::Mpeg);
}

#[test]
fn given_unknown_suffix_when_inferring_format_then_defaults_to_webm() {
    assert_eq!(AudioFormat::from_filename("take.ogg"), AudioFormat::Webm);
    assert_eq!(AudioFormat::from_filename("recording"), AudioFormat::Webm);
}

#[test]
fn given_format_when_asking_mime_then_returns_expected_content_type() {
    assert_eq!(AudioFormat::Wav.as_mime(), "audio/wav");
    assert_eq!(AudioFormat::Mpeg.as_mime(), "audio/mpeg");
    assert_eq!(AudioFormat::Webm.as_mime(), "audio/webm");
}

#[test]
fn given_uploaded_bytes_when_building_payload_then_keeps_data_and_format() {
    let payload = AudioPayload::from_upload("voice.wav", vec![1, 2, 3]);

    assert_eq!(payload.format, AudioFormat::Wav);
    assert_eq!(payload.data.as_ref(), &[1, 2, 3]);
}
