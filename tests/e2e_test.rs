/// End-to-end tests for the CLI
///
/// Every run reads the saved documents under `tests/fixtures/sample-inventory`
/// so no aws CLI is needed.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_inventory() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample-inventory")
}

fn inventory_arg() -> String {
    sample_inventory().display().to_string()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("cloud-netmap")
            .args(["--inventory-dir", &inventory_arg()])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("cloud-netmap").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("cloud-netmap").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("cloud-netmap")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid --iterate value
    #[test]
    fn test_exit_code_invalid_iterate() {
        cargo_bin_cmd!("cloud-netmap")
            .args(["--iterate", "region"])
            .assert()
            .code(2);
    }

    /// Exit code 2: --secmap and --iterate together
    #[test]
    fn test_exit_code_secmap_with_iterate() {
        cargo_bin_cmd!("cloud-netmap")
            .args(["--secmap", "i-0web", "--iterate", "vpc"])
            .assert()
            .code(2);
    }

    /// Exit code 1: Application error - unknown instance
    #[test]
    fn test_exit_code_unknown_instance() {
        cargo_bin_cmd!("cloud-netmap")
            .args(["--inventory-dir", &inventory_arg(), "--secmap", "i-missing"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Unknown resource: i-missing"));
    }

    /// Exit code 1: Application error - security view of a subnet
    #[test]
    fn test_exit_code_not_an_instance() {
        cargo_bin_cmd!("cloud-netmap")
            .args(["--inventory-dir", &inventory_arg(), "--secmap", "subnet-0a1pub"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("not an instance"));
    }

    /// Exit code 1: Application error - malformed IP address
    #[test]
    fn test_exit_code_invalid_address() {
        cargo_bin_cmd!("cloud-netmap")
            .args(["--inventory-dir", &inventory_arg(), "--relevant-to", "10.0.300.1"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid IP address"));
    }

    /// Exit code 1: Application error - undecodable inventory document
    #[test]
    fn test_exit_code_corrupt_inventory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("describe-vpcs.json"), "{not json").unwrap();

        cargo_bin_cmd!("cloud-netmap")
            .args(["--inventory-dir", &dir.path().display().to_string()])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("describe-vpcs.json"));
    }
}

mod topology_tests {
    use super::*;

    #[test]
    fn test_full_topology_to_stdout() {
        cargo_bin_cmd!("cloud-netmap")
            .args(["--inventory-dir", &inventory_arg()])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("digraph G {"))
            .stdout(predicate::str::contains("\"i-0web\""))
            .stdout(predicate::str::contains("\"i-0stage\""))
            .stdout(predicate::str::contains("subgraph \"cluster_i-0web\""))
            .stdout(predicate::str::contains("{ rank=same; \"rank_Subnet\";"))
            .stdout(predicate::str::ends_with("}\n"));
    }

    #[test]
    fn test_vpc_filter_with_short_id() {
        cargo_bin_cmd!("cloud-netmap")
            .args(["--inventory-dir", &inventory_arg(), "--vpc", "0b2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"i-0stage\""))
            .stdout(predicate::str::contains("\"i-0web\"").not());
    }

    #[test]
    fn test_subnet_filter() {
        cargo_bin_cmd!("cloud-netmap")
            .args(["--inventory-dir", &inventory_arg(), "--subnet", "0a1priv"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"i-0app\""))
            .stdout(predicate::str::contains("\"i-0web\"").not());
    }

    #[test]
    fn test_security_groups_are_opt_in() {
        cargo_bin_cmd!("cloud-netmap")
            .args(["--inventory-dir", &inventory_arg()])
            .assert()
            .success()
            .stdout(predicate::str::contains("SG: sg-0web").not());

        cargo_bin_cmd!("cloud-netmap")
            .args(["--inventory-dir", &inventory_arg(), "--security"])
            .assert()
            .success()
            .stdout(predicate::str::contains("SG: sg-0web"));
    }

    #[test]
    fn test_output_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("network.dot");

        cargo_bin_cmd!("cloud-netmap")
            .args([
                "--inventory-dir",
                &inventory_arg(),
                "-o",
                &output.display().to_string(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("digraph G {"));
        assert!(content.contains("\"vpc-0a1\""));
    }

    #[test]
    fn test_iterate_by_vpc_writes_one_file_each() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("cloud-netmap")
            .args([
                "--inventory-dir",
                &inventory_arg(),
                "--iterate",
                "vpc",
                "--output-dir",
                &dir.path().display().to_string(),
            ])
            .assert()
            .success();

        let prod = fs::read_to_string(dir.path().join("vpc-0a1.dot")).unwrap();
        let staging = fs::read_to_string(dir.path().join("vpc-0b2.dot")).unwrap();
        assert!(prod.contains("\"i-0web\""));
        assert!(!prod.contains("\"i-0stage\""));
        assert!(staging.contains("\"i-0stage\""));
    }

    #[test]
    fn test_iterate_by_subnet_within_vpc() {
        let dir = TempDir::new().unwrap();

        cargo_bin_cmd!("cloud-netmap")
            .args([
                "--inventory-dir",
                &inventory_arg(),
                "--vpc",
                "vpc-0a1",
                "--iterate",
                "subnet",
                "--output-dir",
                &dir.path().display().to_string(),
            ])
            .assert()
            .success();

        assert!(dir.path().join("subnet-0a1pub.dot").exists());
        assert!(dir.path().join("subnet-0a1priv.dot").exists());
        assert!(!dir.path().join("subnet-0b2app.dot").exists());
    }
}

mod security_view_tests {
    use super::*;

    #[test]
    fn test_secmap_draws_reachable_groups() {
        cargo_bin_cmd!("cloud-netmap")
            .args(["--inventory-dir", &inventory_arg(), "--secmap", "i-0app"])
            .assert()
            .success()
            .stdout(predicate::str::contains("subgraph \"cluster_sg-0app\""))
            .stdout(predicate::str::contains("subgraph \"cluster_sg-0web\""))
            .stdout(predicate::str::contains("cluster_sg-0stage").not())
            .stdout(predicate::str::contains("\"sg-0app_ingress_rules\" [shape=\"Mrecord\""))
            .stderr(predicate::str::contains("reaches 2 security group(s)"));
    }
}

mod relevant_to_tests {
    use super::*;

    #[test]
    fn test_lists_covering_resources() {
        cargo_bin_cmd!("cloud-netmap")
            .args(["--inventory-dir", &inventory_arg(), "--relevant-to", "10.0.2.5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Subnet\tsubnet-0a1priv\tprod-private"))
            .stdout(predicate::str::contains("Network\tvpc-0a1\tprod"))
            .stdout(predicate::str::contains("subnet-0a1pub").not())
            .stdout(predicate::str::contains("digraph").not());
    }
}

mod config_file_tests {
    use super::*;

    fn write_config(dir: &std::path::Path, content: &str) {
        fs::write(dir.join("netmap.config.yml"), content).unwrap();
    }

    #[test]
    fn test_auto_discovered_config_supplies_inventory_and_flags() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            &format!(
                "inventory_dir: {}\ndraw_security_groups: true\n",
                inventory_arg()
            ),
        );

        cargo_bin_cmd!("cloud-netmap")
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("SG: sg-0web"));
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        fs::write(&config_path, format!("inventory_dir: {}\n", inventory_arg())).unwrap();

        cargo_bin_cmd!("cloud-netmap")
            .args(["--config", &config_path.display().to_string()])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"vpc-0b2\""));
    }

    #[test]
    fn test_unknown_field_is_warned_about() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            &format!("inventory_dir: {}\nregion: eu-west-1\n", inventory_arg()),
        );

        cargo_bin_cmd!("cloud-netmap")
            .current_dir(dir.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("Unknown config field 'region'"));
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "cache_ttl_hours: 0\n");

        cargo_bin_cmd!("cloud-netmap")
            .current_dir(dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("cache_ttl_hours must be greater than 0"));
    }

    #[test]
    fn test_cli_output_dir_overrides_config() {
        let dir = TempDir::new().unwrap();
        let from_config = dir.path().join("from-config");
        let from_cli = dir.path().join("from-cli");
        fs::create_dir(&from_config).unwrap();
        fs::create_dir(&from_cli).unwrap();
        write_config(
            dir.path(),
            &format!(
                "inventory_dir: {}\noutput_dir: {}\n",
                inventory_arg(),
                from_config.display()
            ),
        );

        cargo_bin_cmd!("cloud-netmap")
            .current_dir(dir.path())
            .args([
                "--iterate",
                "vpc",
                "--output-dir",
                &from_cli.display().to_string(),
            ])
            .assert()
            .success();

        assert!(from_cli.join("vpc-0a1.dot").exists());
        assert!(!from_config.join("vpc-0a1.dot").exists());
    }
}
