//! CLI command parsing and record I/O tests.
//!
//! Tests cover argument parsing (via clap `try_parse_from`) and the JSON
//! record round-trip that the generate and show commands rely on.

// ============================================================================
// Record file I/O tests
// ============================================================================

mod record_io {
    use arbiter_data::synthetic::{self, SynthConfig};
    use arbiter_data::{DecayRecord, DecayRecordCollection};
    use ndarray::Array3;
    use std::fs;

    fn small_record(name: &str) -> DecayRecord {
        let config = SynthConfig {
            name: name.to_string(),
            sequence_lengths: vec![1, 2, 4],
            n_throws: 5,
            shots_per_throw: 32,
            ..Default::default()
        };
        synthetic::generate(&config).unwrap()
    }

    #[test]
    fn test_record_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");

        let record = small_record("roundtrip");
        fs::write(&path, serde_json::to_string_pretty(&record).unwrap()).unwrap();

        let source = fs::read_to_string(&path).unwrap();
        let loaded: DecayRecord = serde_json::from_str(&source).unwrap();
        assert_eq!(record, loaded);
    }

    #[test]
    fn test_reloaded_record_normalizes_identically() {
        let record = small_record("views");
        let json = serde_json::to_string(&record).unwrap();
        let loaded: DecayRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record.normalized_data(), loaded.normalized_data());
        assert_eq!(record.upper_reference(), loaded.upper_reference());
    }

    #[test]
    fn test_collection_roundtrip() {
        let mut collection = DecayRecordCollection::new();
        collection.add(small_record("first"));
        collection.add(small_record("second"));

        let json = serde_json::to_string_pretty(&collection).unwrap();
        let loaded: DecayRecordCollection = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.records()[0].name(), "first");
        assert_eq!(loaded.records()[1].name(), "second");
    }

    #[test]
    fn test_load_rejects_tampered_labels() {
        // Two cube columns but three sequence-length labels.
        let json = r#"{
            "name": "tampered",
            "measurements": {"v": 1, "dim": [1, 2, 2], "data": [1.0, 2.0, 3.0, 4.0]},
            "sequence_lengths": [1, 2, 3],
            "shots_per_throw": 5,
            "ragged": false
        }"#;

        let result: Result<DecayRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let result: Result<DecayRecord, _> = serde_json::from_str("this is not a record");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let path = "/tmp/arbiter_test_nonexistent_file_12345.json";
        assert!(!std::path::Path::new(path).exists());
    }

    #[test]
    fn test_handwritten_record_file_loads() {
        // The wire format a user might write by hand: a flat cube plus
        // labels and the shot count.
        let cube = Array3::from_elem((1, 2, 2), 3.0);
        let record = DecayRecord::new("manual", cube, 4).unwrap();
        let json = serde_json::to_string(&record).unwrap();

        let loaded: DecayRecord = serde_json::from_str(&json).unwrap();
        assert!(loaded.normalized_data().iter().all(|&v| v == 12.0));
    }
}

// ============================================================================
// Clap argument parsing (test via try_parse_from on equivalent structs)
// ============================================================================

mod clap_parsing {
    use clap::{Parser, Subcommand};

    // Mirror the CLI struct for testing (since main.rs is a binary)
    #[derive(Parser)]
    #[command(name = "arbiter")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Generate {
            #[arg(short, long, default_value = "synthetic")]
            name: String,
            #[arg(
                short = 'l',
                long,
                value_delimiter = ',',
                default_value = "1,2,4,8,16,32,64,128"
            )]
            seq_lengths: Vec<u32>,
            #[arg(short, long, default_value = "30")]
            throws: usize,
            #[arg(short, long, default_value = "1024")]
            shots: u32,
            #[arg(short, long)]
            referenced: bool,
            #[arg(long, default_value = "0.98")]
            decay_rate: f64,
            #[arg(long, default_value = "0")]
            seed: u64,
            #[arg(short, long)]
            output: Option<String>,
        },
        Show {
            #[arg(required = true)]
            files: Vec<String>,
            #[arg(short, long, default_value = "table")]
            format: String,
            #[arg(long, default_value = "32")]
            max_rows: usize,
        },
        Version,
    }

    // --- Generate command ---

    #[test]
    fn test_parse_generate_minimal() {
        let cli = TestCli::try_parse_from(["arbiter", "generate"]).unwrap();
        match cli.command {
            TestCommands::Generate {
                name,
                seq_lengths,
                throws,
                shots,
                referenced,
                decay_rate,
                seed,
                output,
            } => {
                assert_eq!(name, "synthetic");
                assert_eq!(seq_lengths, vec![1, 2, 4, 8, 16, 32, 64, 128]);
                assert_eq!(throws, 30);
                assert_eq!(shots, 1024);
                assert!(!referenced);
                assert_eq!(decay_rate, 0.98);
                assert_eq!(seed, 0);
                assert!(output.is_none());
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_parse_generate_with_all_args() {
        let cli = TestCli::try_parse_from([
            "arbiter",
            "generate",
            "-n",
            "qubit0",
            "-l",
            "1,4,16",
            "-t",
            "10",
            "-s",
            "256",
            "-r",
            "--decay-rate",
            "0.95",
            "--seed",
            "7",
            "-o",
            "out.json",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Generate {
                name,
                seq_lengths,
                throws,
                shots,
                referenced,
                decay_rate,
                seed,
                output,
            } => {
                assert_eq!(name, "qubit0");
                assert_eq!(seq_lengths, vec![1, 4, 16]);
                assert_eq!(throws, 10);
                assert_eq!(shots, 256);
                assert!(referenced);
                assert_eq!(decay_rate, 0.95);
                assert_eq!(seed, 7);
                assert_eq!(output.unwrap(), "out.json");
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_parse_generate_rejects_non_numeric_lengths() {
        let result = TestCli::try_parse_from(["arbiter", "generate", "-l", "1,two,3"]);
        assert!(result.is_err());
    }

    // --- Show command ---

    #[test]
    fn test_parse_show_minimal() {
        let cli = TestCli::try_parse_from(["arbiter", "show", "record.json"]).unwrap();
        match cli.command {
            TestCommands::Show {
                files,
                format,
                max_rows,
            } => {
                assert_eq!(files, vec!["record.json"]);
                assert_eq!(format, "table");
                assert_eq!(max_rows, 32);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_parse_show_multiple_files() {
        let cli = TestCli::try_parse_from(["arbiter", "show", "a.json", "b.json", "c.json"])
            .unwrap();
        match cli.command {
            TestCommands::Show { files, .. } => {
                assert_eq!(files, vec!["a.json", "b.json", "c.json"]);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_parse_show_json_format() {
        let cli =
            TestCli::try_parse_from(["arbiter", "show", "record.json", "-f", "json"]).unwrap();
        match cli.command {
            TestCommands::Show { format, .. } => {
                assert_eq!(format, "json");
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_parse_show_max_rows() {
        let cli =
            TestCli::try_parse_from(["arbiter", "show", "record.json", "--max-rows", "5"])
                .unwrap();
        match cli.command {
            TestCommands::Show { max_rows, .. } => {
                assert_eq!(max_rows, 5);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_parse_show_missing_files() {
        let result = TestCli::try_parse_from(["arbiter", "show"]);
        assert!(result.is_err());
    }

    // --- Version ---

    #[test]
    fn test_parse_version() {
        let cli = TestCli::try_parse_from(["arbiter", "version"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Version));
    }

    // --- Verbose flag ---

    #[test]
    fn test_parse_verbose_flag() {
        let cli = TestCli::try_parse_from(["arbiter", "-v", "version"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_verbose_vv() {
        let cli = TestCli::try_parse_from(["arbiter", "-vv", "version"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_verbose_vvv() {
        let cli = TestCli::try_parse_from(["arbiter", "-vvv", "version"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    // --- Error cases ---

    #[test]
    fn test_no_subcommand() {
        let result = TestCli::try_parse_from(["arbiter"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_subcommand() {
        let result = TestCli::try_parse_from(["arbiter", "foobar"]);
        assert!(result.is_err());
    }
}
