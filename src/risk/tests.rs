#[cfg(test)]
mod risk {
    use chrono::NaiveDate;
    use strum::IntoEnumIterator;

    use crate::model::{
        FirewallRule, InterfaceConfig, ParsedConfig, RuleAction, SecuritySettings, VpnConfig,
    };
    use crate::parser::parse_config;
    use crate::risk::catalog::CATALOG;
    use crate::risk::{
        analyze_config, calculate_risk_score, ConfigRisk, RiskCategory, RiskEngine, RiskType,
        Severity,
    };
    use crate::settings::RiskSettings;

    fn engine() -> RiskEngine {
        RiskEngine::new(
            RiskSettings::default()
                .with_reference_date(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()),
        )
    }

    fn types(risks: &[ConfigRisk]) -> Vec<RiskType> {
        risks.iter().map(|r| r.risk_type).collect()
    }

    fn of_type(risks: &[ConfigRisk], risk_type: RiskType) -> Vec<&ConfigRisk> {
        risks.iter().filter(|r| r.risk_type == risk_type).collect()
    }

    /// Every feature on, MFA on, custom port, NTP set: nothing but the
    /// entities under test can raise findings.
    fn hardened() -> ParsedConfig {
        let mut config = ParsedConfig::default();
        config.security_settings = SecuritySettings {
            ips_enabled: true,
            gav_enabled: true,
            dpi_ssl_enabled: true,
            app_control_enabled: true,
            content_filter_enabled: true,
            botnet_filter_enabled: true,
            anti_spyware_enabled: true,
            geo_ip_enabled: true,
        };
        config.admin_settings.admin_usernames = vec!["secops".to_string()];
        config.admin_settings.mfa_enabled = true;
        config.admin_settings.https_admin_port = 8443;
        config.system_settings.ntp_servers = vec!["pool.ntp.org".to_string()];
        config
    }

    fn rule(src_zone: &str, dst_zone: &str, src: &str, dst: &str) -> FirewallRule {
        FirewallRule {
            source_zone: src_zone.to_string(),
            destination_zone: dst_zone.to_string(),
            source_address: src.to_string(),
            destination_address: dst.to_string(),
            comment: Some("documented".to_string()),
            ..FirewallRule::default()
        }
    }

    #[test]
    fn test_catalog_follows_risk_type_order() {
        let catalog: Vec<RiskType> = CATALOG.iter().map(|d| d.risk_type).collect();
        let declared: Vec<RiskType> = RiskType::iter().collect();
        assert_eq!(catalog, declared);
    }

    #[test]
    fn test_catalog_category_and_severity() {
        use RiskCategory::*;
        use Severity::*;
        let expected = [
            (RiskType::OpenInbound, ExposureRisk, Critical),
            (RiskType::AnyAnyRule, NetworkMisconfiguration, High),
            (RiskType::GuestNotIsolated, NetworkMisconfiguration, High),
            (RiskType::DhcpOnWan, NetworkMisconfiguration, Critical),
            (RiskType::AdminNoMfa, BestPracticeViolation, High),
            (RiskType::DefaultAdminUsername, BestPracticeViolation, Medium),
            (RiskType::DefaultAdminPort, BestPracticeViolation, Low),
            (RiskType::SshOnWan, ExposureRisk, High),
            (RiskType::IpsDisabled, SecurityFeatureDisabled, Critical),
            (RiskType::GavDisabled, SecurityFeatureDisabled, Critical),
            (RiskType::DpiSslDisabled, SecurityFeatureDisabled, Medium),
            (RiskType::BotnetFilterDisabled, SecurityFeatureDisabled, High),
            (RiskType::AppControlDisabled, SecurityFeatureDisabled, Medium),
            (RiskType::ContentFilterDisabled, SecurityFeatureDisabled, Medium),
            (RiskType::RuleNoDescription, BestPracticeViolation, Low),
            (RiskType::VpnWeakEncryption, SecurityFeatureDisabled, High),
            (RiskType::VpnPskOnly, BestPracticeViolation, Medium),
            (RiskType::OutdatedFirmware, BestPracticeViolation, Medium),
            (RiskType::NoNtp, BestPracticeViolation, Low),
        ];
        for (definition, (risk_type, category, severity)) in CATALOG.iter().zip(expected) {
            assert_eq!(definition.risk_type, risk_type);
            assert_eq!(definition.category, category, "{risk_type}");
            assert_eq!(definition.severity, severity, "{risk_type}");
        }
    }

    #[test]
    fn test_string_codes() {
        assert_eq!(RiskType::OpenInbound.as_ref(), "OPEN_INBOUND");
        assert_eq!(RiskType::NoNtp.to_string(), "NO_NTP");
        assert_eq!("DPI_SSL_DISABLED".parse::<RiskType>().ok(), Some(RiskType::DpiSslDisabled));
        assert_eq!(RiskCategory::SecurityFeatureDisabled.as_ref(), "security_feature_disabled");
        assert_eq!(Severity::Critical.as_ref(), "critical");
        let json = serde_json::to_string(&RiskType::VpnPskOnly).unwrap();
        assert_eq!(json, "\"VPN_PSK_ONLY\"");
    }

    #[test]
    fn test_hardened_config_is_clean() {
        assert!(engine().analyze(&hardened()).is_empty());
    }

    #[test]
    fn test_open_inbound_from_text() {
        let config = parse_config(
            "access-rule from WAN to LAN source any destination any service any action allow",
        );
        let risks = analyze_config(&config);
        let open = of_type(&risks, RiskType::OpenInbound);
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].severity, Severity::Critical);
        assert_eq!(open[0].risk_category, RiskCategory::ExposureRisk);
    }

    #[test]
    fn test_zone_and_address_match_ignores_case() {
        let mut config = hardened();
        config.rules.push(rule("wan", "Lan", "10.0.0.1", "ANY"));
        let risks = engine().analyze(&config);
        assert_eq!(types(&risks), vec![RiskType::OpenInbound]);
    }

    #[test]
    fn test_deny_rules_are_not_exposure() {
        let mut config = hardened();
        config.rules.push(FirewallRule {
            action: RuleAction::Deny,
            ..rule("WAN", "LAN", "any", "any")
        });
        config.rules.push(FirewallRule {
            action: RuleAction::Deny,
            ..rule("GUEST", "LAN", "any", "any")
        });
        assert!(engine().analyze(&config).is_empty());
    }

    #[test]
    fn test_guest_any_any_overlap() {
        let mut config = hardened();
        config.rules.push(rule("GUEST", "LAN", "any", "any"));
        let risks = engine().analyze(&config);
        assert_eq!(
            types(&risks),
            vec![RiskType::AnyAnyRule, RiskType::GuestNotIsolated]
        );
    }

    #[test]
    fn test_disabled_rule_still_reported() {
        let mut config = hardened();
        config.rules.push(FirewallRule {
            enabled: false,
            rule_name: Some("Legacy-Inbound".to_string()),
            ..rule("WAN", "LAN", "any", "any")
        });
        let risks = engine().analyze(&config);
        let open = of_type(&risks, RiskType::OpenInbound);
        assert_eq!(open.len(), 1);
        assert!(open[0].description.contains("'Legacy-Inbound'"));
        assert!(open[0].remediation.contains("'Legacy-Inbound'"));
        assert_eq!(of_type(&risks, RiskType::AnyAnyRule).len(), 1);
    }

    #[test]
    fn test_feature_and_admin_defaults_yield_seven_findings() {
        let mut config = ParsedConfig::default();
        config.security_settings = SecuritySettings {
            ips_enabled: false,
            gav_enabled: false,
            dpi_ssl_enabled: false,
            botnet_filter_enabled: false,
            app_control_enabled: true,
            content_filter_enabled: true,
            ..SecuritySettings::default()
        };
        config.system_settings.ntp_servers = vec!["time.example.com".to_string()];
        let risks = engine().analyze(&config);
        assert_eq!(
            types(&risks),
            vec![
                RiskType::AdminNoMfa,
                RiskType::DefaultAdminUsername,
                RiskType::DefaultAdminPort,
                RiskType::IpsDisabled,
                RiskType::GavDisabled,
                RiskType::DpiSslDisabled,
                RiskType::BotnetFilterDisabled,
            ]
        );
    }

    #[test]
    fn test_default_config_findings() {
        let risks = engine().analyze(&ParsedConfig::default());
        assert_eq!(
            types(&risks),
            vec![
                RiskType::AdminNoMfa,
                RiskType::DefaultAdminUsername,
                RiskType::DefaultAdminPort,
                RiskType::IpsDisabled,
                RiskType::GavDisabled,
                RiskType::DpiSslDisabled,
                RiskType::BotnetFilterDisabled,
                RiskType::AppControlDisabled,
                RiskType::ContentFilterDisabled,
                RiskType::NoNtp,
            ]
        );
    }

    #[test]
    fn test_weak_vpn_reports_both_findings() {
        let config = parse_config(r#"vpn policy "Weak-VPN" encryption des auth psk"#);
        assert_eq!(config.vpn_policies.len(), 1);
        let risks = analyze_config(&config);
        let weak = of_type(&risks, RiskType::VpnWeakEncryption);
        let psk = of_type(&risks, RiskType::VpnPskOnly);
        assert_eq!(weak.len(), 1);
        assert_eq!(weak[0].severity, Severity::High);
        assert!(weak[0].description.contains("Weak-VPN"));
        assert_eq!(psk.len(), 1);
        assert_eq!(psk[0].severity, Severity::Medium);
        assert!(psk[0].remediation.contains("Weak-VPN"));
    }

    #[test]
    fn test_vpn_encryption_and_auth_variants() {
        let mut config = hardened();
        for (name, encryption, auth) in [
            ("a", "3DES-CBC", "pre-shared-key"),
            ("b", "aes-256", "psk+certificate"),
            ("c", "AES-GCM", "x509"),
            ("d", "des", "shared-secret"),
        ] {
            config.vpn_policies.push(VpnConfig {
                policy_name: name.to_string(),
                encryption: Some(encryption.to_string()),
                authentication_method: Some(auth.to_string()),
            });
        }
        config.vpn_policies.push(VpnConfig::default());
        let risks = engine().analyze(&config);
        let weak: Vec<_> = of_type(&risks, RiskType::VpnWeakEncryption)
            .iter()
            .map(|r| r.description.clone())
            .collect();
        assert_eq!(weak.len(), 2);
        assert!(weak[0].contains("'a'"));
        assert!(weak[1].contains("'d'"));
        let psk = of_type(&risks, RiskType::VpnPskOnly);
        assert_eq!(psk.len(), 2);
        assert!(psk[0].description.contains("'a'"));
        assert!(psk[1].description.contains("'d'"));
    }

    #[test]
    fn test_dhcp_and_ssh_on_wan() {
        let mut config = hardened();
        config.interfaces.push(InterfaceConfig {
            interface_name: "X1".to_string(),
            zone: Some("wan".to_string()),
            dhcp_server_enabled: true,
            ..InterfaceConfig::default()
        });
        config.interfaces.push(InterfaceConfig {
            interface_name: "X0".to_string(),
            zone: Some("LAN".to_string()),
            dhcp_server_enabled: true,
            ..InterfaceConfig::default()
        });
        let risks = engine().analyze(&config);
        assert_eq!(types(&risks), vec![RiskType::DhcpOnWan]);
        assert!(risks[0].remediation.contains("'X1'"));

        config.admin_settings.ssh_enabled = true;
        let risks = engine().analyze(&config);
        assert_eq!(types(&risks), vec![RiskType::DhcpOnWan, RiskType::SshOnWan]);
        assert!(risks[1].description.contains("X1"));
    }

    #[test]
    fn test_ssh_without_wan_interface() {
        let mut config = hardened();
        config.admin_settings.ssh_enabled = true;
        assert!(engine().analyze(&config).is_empty());
    }

    #[test]
    fn test_default_usernames_one_per_match() {
        let mut config = hardened();
        config.admin_settings.admin_usernames = vec![
            "Admin".to_string(),
            "ops".to_string(),
            "ROOT".to_string(),
            "administrator".to_string(),
        ];
        let risks = engine().analyze(&config);
        let names = of_type(&risks, RiskType::DefaultAdminUsername);
        assert_eq!(names.len(), 3);
        assert!(names[0].description.contains("'Admin'"));
        assert!(names[1].description.contains("'ROOT'"));
    }

    #[test]
    fn test_rule_without_description() {
        let mut config = hardened();
        for comment in [None, Some(""), Some("   "), Some("ok")] {
            config.rules.push(FirewallRule {
                comment: comment.map(str::to_string),
                action: RuleAction::Deny,
                ..FirewallRule::default()
            });
        }
        let risks = engine().analyze(&config);
        assert_eq!(of_type(&risks, RiskType::RuleNoDescription).len(), 3);
        assert!(risks[0].description.contains("#1"));
        assert!(risks[2].description.contains("#3"));
    }

    #[test]
    fn test_outdated_firmware_single_finding() {
        let mut config = hardened();
        config.system_settings.firmware_version =
            "SonicOS 6.2.5.1 legacy build 2019-03-01".to_string();
        let risks = engine().analyze(&config);
        assert_eq!(types(&risks), vec![RiskType::OutdatedFirmware]);
        assert!(risks[0].description.contains("2019-03-01"));
        assert!(risks[0].description.contains("legacy"));
    }

    #[test]
    fn test_outdated_firmware_uses_reference_date() {
        let mut config = hardened();
        config.system_settings.firmware_version = "7.1.1 built 2026-06-15".to_string();
        assert!(engine().analyze(&config).is_empty());

        let later = RiskEngine::new(
            RiskSettings::default()
                .with_reference_date(NaiveDate::from_ymd_opt(2027, 6, 1).unwrap()),
        );
        assert_eq!(
            types(&later.analyze(&config)),
            vec![RiskType::OutdatedFirmware]
        );
    }

    #[test]
    fn test_current_firmware_not_reported() {
        let mut config = hardened();
        config.system_settings.firmware_version = "SonicOS 7.1.2-7019".to_string();
        assert!(engine().analyze(&config).is_empty());
    }

    #[test]
    fn test_no_ntp_names_host() {
        let mut config = hardened();
        config.system_settings.ntp_servers.clear();
        config.system_settings.hostname = Some("edge-01".to_string());
        let risks = engine().analyze(&config);
        assert_eq!(types(&risks), vec![RiskType::NoNtp]);
        assert!(risks[0].description.contains("edge-01"));
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let text = "access-rule from GUEST to LAN\naccess-rule from WAN to LAN\ninterface X1 zone WAN dhcp-server\nvpn policy v encryption 3des auth psk";
        let config = parse_config(text);
        let first = engine().analyze(&config);
        let second = engine().analyze(&parse_config(text));
        assert_eq!(first, second);
        assert_eq!(calculate_risk_score(&first), calculate_risk_score(&second));
        assert_eq!(calculate_risk_score(&first), 0);
    }
}
