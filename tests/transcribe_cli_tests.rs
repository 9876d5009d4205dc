mod common;

use common::TestEnv;

#[test]
fn missing_input_fails_and_creates_no_output() {
    let env = TestEnv::new();

    let output = env.run(&["transcribe", "nonexistent.mp3"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !output.status.success(),
        "transcribe of a missing file should fail\nstderr:\n{}",
        stderr
    );
    assert!(
        stderr.contains("Audio file not found"),
        "expected missing-file message\nstderr:\n{}",
        stderr
    );
    assert!(
        !env.work_dir().join("nonexistent_transcription.txt").exists(),
        "no output file should be created for a failed run"
    );
}

#[test]
fn missing_model_fails_and_creates_no_output() {
    let env = TestEnv::new();
    env.write_silence_wav("speech.wav", 1);

    let output = env.run(&["transcribe", "speech.wav"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !output.status.success(),
        "transcribe without a model should fail\nstderr:\n{}",
        stderr
    );
    assert!(
        stderr.contains("Whisper model not found"),
        "expected missing-model message\nstderr:\n{}",
        stderr
    );
    assert!(
        !env.work_dir().join("speech_transcription.txt").exists(),
        "no output file should be created for a failed run"
    );
}

#[test]
fn zero_chunk_length_is_rejected() {
    let env = TestEnv::new();
    env.write_silence_wav("speech.wav", 1);

    let output = env.run(&["transcribe", "speech.wav", "--chunk-length", "0"]);
    assert!(
        !output.status.success(),
        "--chunk-length 0 should be rejected"
    );
}

#[test]
fn failed_run_creates_no_explicit_output() {
    let env = TestEnv::new();

    let output = env.run(&["transcribe", "missing.wav", "-o", "result.txt"]);
    assert!(!output.status.success());
    assert!(!env.work_dir().join("result.txt").exists());
}
