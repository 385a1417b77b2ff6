#![cfg(feature = "cli")]

use passport_check::{
    count_valid, CheckEngine, CheckError, CliConfig, LocalStorage, PassportPipeline, Tally,
};
use tempfile::TempDir;

const BATCH: &str = "\
ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in

eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm";

fn write_batch(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn config_for(args: &[&str]) -> CliConfig {
    use clap::Parser;
    let mut argv = vec!["passport-check"];
    argv.extend_from_slice(args);
    let mut config = CliConfig::try_parse_from(argv).unwrap();
    config.load_rules().unwrap();
    config
}

#[tokio::test]
async fn test_end_to_end_counts() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_batch(&temp_dir, "batch.txt", BATCH);

    let pipeline = PassportPipeline::new(LocalStorage::default(), config_for(&[&input]));
    let tally = CheckEngine::new(pipeline).run().await.unwrap();

    assert_eq!(
        tally,
        Tally {
            total: 7,
            presence_valid: 5,
            strict_valid: 4,
        }
    );
    assert!(tally.presence_valid >= tally.strict_valid);
}

#[tokio::test]
async fn test_first_record_spans_two_lines() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_batch(
        &temp_dir,
        "one.txt",
        "ecl:gry pid:860033327 eyr:2020 hcl:#fffffd\nbyr:1937 iyr:2017 cid:147 hgt:183cm",
    );

    let pipeline = PassportPipeline::new(LocalStorage::default(), config_for(&[&input]));
    let tally = CheckEngine::new(pipeline).run().await.unwrap();

    assert_eq!(tally.total, 1);
    assert_eq!(tally.presence_valid, 1);
    assert_eq!(tally.strict_valid, 1);
}

#[tokio::test]
async fn test_missing_input_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("nope.txt");

    let pipeline = PassportPipeline::new(
        LocalStorage::default(),
        config_for(&[input.to_str().unwrap()]),
    );
    let err = CheckEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, CheckError::IoError(_)));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn test_report_and_rules_files() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_batch(&temp_dir, "batch.txt", BATCH);
    let rules = write_batch(
        &temp_dir,
        "rules.toml",
        "[height_in]\nmin = 75\nmax = 80\n",
    );
    let report = temp_dir.path().join("out/report.csv");

    let config = config_for(&[
        &input,
        "--rules",
        &rules,
        "--report",
        report.to_str().unwrap(),
    ]);
    let pipeline = PassportPipeline::new(LocalStorage::default(), config);
    let tally = CheckEngine::new(pipeline).run().await.unwrap();

    // 74in no longer passes
    assert_eq!(tally.presence_valid, 5);
    assert_eq!(tally.strict_valid, 3);

    let content = std::fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "index,presence_valid,strict_valid,violations");
    assert_eq!(lines[6], "5,true,false,hgt: 74in is outside 75..=80in");
}

#[test]
fn test_count_valid_matches_pipeline() {
    assert_eq!(
        count_valid(BATCH),
        Tally {
            total: 7,
            presence_valid: 5,
            strict_valid: 4,
        }
    );
}

#[test]
fn test_windows_line_endings() {
    let text = BATCH.replace('\n', "\r\n");
    assert_eq!(count_valid(&text), count_valid(BATCH));
}
