use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

pub fn run_longhand(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
    work: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
            work: tempfile::tempdir().expect("create temporary working dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_longhand"))
            .args(args)
            .current_dir(self.work.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path())
            .env_remove("LONGHAND_MODELS_DIR")
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to execute longhand binary")
    }

    #[allow(dead_code)]
    pub fn work_dir(&self) -> &Path {
        self.work.path()
    }

    /// Write a short silent WAV file for pipeline-facing tests.
    #[allow(dead_code)]
    pub fn write_silence_wav(&self, name: &str, seconds: u32) -> std::path::PathBuf {
        let path = self.work.path().join(name);
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).expect("create test WAV");
        for _ in 0..(seconds * 16_000) {
            writer.write_sample(0i16).expect("write test sample");
        }
        writer.finalize().expect("finalize test WAV");
        path
    }
}
