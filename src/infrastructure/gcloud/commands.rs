//! Argument lists for every gcloud call Runcast makes

use std::path::Path;

use crate::domain::entities::ServiceSpec;
use crate::domain::value_objects::{DomainName, ImageTag, ProjectId};

use super::command::GcloudCommand;

pub fn version() -> GcloudCommand {
    GcloudCommand::capture(["--version"])
}

/// Accounts with an active session, one per line
pub fn active_accounts() -> GcloudCommand {
    GcloudCommand::capture(["auth", "list"])
        .flag("filter", "status:ACTIVE")
        .flag("format", "value(account)")
}

pub fn set_project(project: &ProjectId) -> GcloudCommand {
    GcloudCommand::stream(["config", "set", "project", project.as_str()])
}

pub fn describe_project(project: &ProjectId) -> GcloudCommand {
    GcloudCommand::capture(["projects", "describe", project.as_str()])
        .flag("format", "value(projectId)")
}

pub fn enable_apis(apis: &[String]) -> GcloudCommand {
    let mut cmd = GcloudCommand::stream(["services", "enable"]);
    for api in apis {
        cmd = cmd.arg(api.as_str());
    }
    cmd
}

pub fn submit_build(source: &Path, image: &ImageTag) -> GcloudCommand {
    GcloudCommand::stream(["builds", "submit"])
        .arg(source.display().to_string())
        .flag("tag", image)
}

pub fn deploy_service(spec: &ServiceSpec) -> GcloudCommand {
    let envelope = &spec.envelope;
    let mut cmd = GcloudCommand::stream(["run", "deploy", spec.name.as_str()])
        .flag("image", &spec.image)
        .flag("platform", "managed")
        .flag("region", &spec.region);

    cmd = if envelope.allow_unauthenticated {
        cmd.arg("--allow-unauthenticated")
    } else {
        cmd.arg("--no-allow-unauthenticated")
    };

    cmd = cmd
        .flag("port", envelope.port)
        .flag("memory", &envelope.memory)
        .flag("cpu", &envelope.cpu)
        .flag("concurrency", envelope.concurrency)
        .flag("min-instances", envelope.min_instances)
        .flag("max-instances", envelope.max_instances)
        .flag("timeout", envelope.timeout_secs);

    if !spec.env.is_empty() {
        cmd = cmd.flag("set-env-vars", spec.env_list());
    }
    cmd
}

pub fn service_url(service: &str, region: &str) -> GcloudCommand {
    GcloudCommand::capture(["run", "services", "describe", service])
        .flag("region", region)
        .flag("format", "value(status.url)")
}

pub fn create_domain_mapping(service: &str, domain: &DomainName, region: &str) -> GcloudCommand {
    GcloudCommand::stream(["beta", "run", "domain-mappings", "create"])
        .flag("service", service)
        .flag("domain", domain)
        .flag("region", region)
}

pub fn describe_domain_mapping(domain: &DomainName, region: &str) -> GcloudCommand {
    GcloudCommand::capture(["beta", "run", "domain-mappings", "describe"])
        .flag("domain", domain)
        .flag("region", region)
        .flag("format", "json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DeployConfig;

    fn demo() -> DeployConfig {
        DeployConfig::new(ProjectId::parse("demo-proj").unwrap())
    }

    #[test]
    fn auth_query_filters_active_accounts() {
        insta::assert_snapshot!(
            active_accounts().display("gcloud"),
            @"gcloud auth list --filter=status:ACTIVE '--format=value(account)'"
        );
    }

    #[test]
    fn build_packages_source_dir_with_tag() {
        let config = demo();
        insta::assert_snapshot!(
            submit_build(config.source_dir(), config.image()).display("gcloud"),
            @"gcloud builds submit ./backend --tag=gcr.io/demo-proj/sw-music-backend"
        );
    }

    #[test]
    fn deploy_carries_full_envelope() {
        let cmd = deploy_service(&demo().service_spec());
        insta::assert_snapshot!(
            cmd.display("gcloud"),
            @"gcloud run deploy sw-music-api --image=gcr.io/demo-proj/sw-music-backend --platform=managed --region=us-central1 --allow-unauthenticated --port=8000 --memory=2Gi --cpu=2 --concurrency=80 --min-instances=0 --max-instances=10 --timeout=300 --set-env-vars=ENVIRONMENT=production,GOOGLE_CLOUD_PROJECT=demo-proj,GOOGLE_CLOUD_LOCATION=us-central1,VERTEX_AI_MODEL=gemini-pro"
        );
    }

    #[test]
    fn comma_in_env_value_uses_alternate_delimiter() {
        let spec = demo().with_backend("prod,eu", "gemini-pro").service_spec();
        let cmd = deploy_service(&spec);
        let env_arg = cmd
            .args()
            .iter()
            .find(|a| a.starts_with("--set-env-vars="))
            .unwrap();
        assert_eq!(
            env_arg,
            "--set-env-vars=^@^ENVIRONMENT=prod,eu@GOOGLE_CLOUD_PROJECT=demo-proj@GOOGLE_CLOUD_LOCATION=us-central1@VERTEX_AI_MODEL=gemini-pro"
        );

        // gcloud splits on the declared delimiter, so every item keeps its `=`
        let items: Vec<_> = env_arg["--set-env-vars=^@^".len()..].split('@').collect();
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| item.contains('=')));
    }

    #[test]
    fn private_service_disables_public_access() {
        let mut envelope = demo().envelope().clone();
        envelope.allow_unauthenticated = false;
        let cmd = deploy_service(&demo().with_envelope(envelope).service_spec());
        assert!(cmd.args().contains(&"--no-allow-unauthenticated".to_string()));
        assert!(!cmd.args().contains(&"--allow-unauthenticated".to_string()));
    }

    #[test]
    fn enable_lists_each_api() {
        let apis = vec!["run.googleapis.com".to_string(), "cloudbuild.googleapis.com".to_string()];
        assert_eq!(
            enable_apis(&apis).args(),
            &["services", "enable", "run.googleapis.com", "cloudbuild.googleapis.com"]
        );
    }

    #[test]
    fn domain_mapping_targets_region() {
        let domain = DomainName::parse("api.example.com").unwrap();
        assert_eq!(
            create_domain_mapping("sw-music-api", &domain, "us-central1").display("gcloud"),
            "gcloud beta run domain-mappings create --service=sw-music-api --domain=api.example.com --region=us-central1"
        );
        assert_eq!(
            describe_domain_mapping(&domain, "us-central1").args().last().map(String::as_str),
            Some("--format=json")
        );
    }
}
