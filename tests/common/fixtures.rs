use vitae::{
    BulletPoint, CertificationEntry, Contact, EducationEntry, ExperienceEntry, Resume, SkillGroup,
};

/// A complete resume touching every section: bold markup, profile links
/// with and without schemes, and bullets long enough to wrap.
pub fn full_resume() -> Resume {
    Resume {
        name: "Ada Hargrove".into(),
        contact: Contact {
            phone: Some("+47 400 12 345".into()),
            email: Some("ada@hargrove.dev".into()),
            github: Some("github.com/adahargrove".into()),
            linkedin: Some("https://linkedin.com/in/adahargrove".into()),
            location: Some("Oslo, Norway".into()),
        },
        summary: "Systems engineer with **nine years** of storage and distributed \
                  systems work."
            .into(),
        experience: vec![
            ExperienceEntry {
                role: "Staff Engineer".into(),
                company: "Brightline Systems".into(),
                location: "Oslo, Norway".into(),
                date: "2021 - Present".into(),
                points: vec![
                    BulletPoint::new(
                        "Cut p99 write latency by **38%** by moving the hot path to a \
                         log-structured store with group commit",
                    ),
                    BulletPoint::new(
                        "Designed the cross-region replication layer that now carries \
                         **40%** of company traffic",
                    ),
                    BulletPoint::new(
                        "Led the on-call overhaul that halved page volume in one quarter",
                    ),
                ],
            },
            ExperienceEntry {
                role: "Senior Engineer".into(),
                company: "Nordavind AS".into(),
                location: "Bergen, Norway".into(),
                date: "2017 - 2021".into(),
                points: vec![
                    BulletPoint::new(
                        "Built the ingestion pipeline for **forty thousand** events per \
                         second across three regions",
                    ),
                    BulletPoint::new("Introduced property-based testing to the storage team"),
                ],
            },
        ],
        research: vec![ExperienceEntry {
            role: "Research Assistant".into(),
            company: "NTNU Systems Lab".into(),
            location: "Trondheim, Norway".into(),
            date: "2015 - 2017".into(),
            points: vec![
                BulletPoint::new("Published two papers on log-structured merge trees"),
                BulletPoint::new(
                    "Benchmarked **write amplification** across five storage engines",
                ),
            ],
        }],
        education: vec![EducationEntry {
            school: "Norwegian University of Science and Technology".into(),
            degree: "MSc Computer Science".into(),
            location: Some("Trondheim".into()),
            date: "2013 - 2015".into(),
            details: Some("Thesis: adaptive compaction scheduling for LSM trees".into()),
        }],
        certification: vec![CertificationEntry {
            name: "Certified Kubernetes Administrator".into(),
            institution: "CNCF".into(),
            date: "2022".into(),
            details: None,
        }],
        skills: vec![
            SkillGroup {
                category: "Languages".into(),
                items: "Rust, Go, **C++**, Python".into(),
            },
            SkillGroup {
                category: "Storage".into(),
                items: "RocksDB, Postgres, S3, Parquet".into(),
            },
            SkillGroup {
                category: "Tooling".into(),
                items: "Kubernetes, Terraform, Grafana".into(),
            },
        ],
    }
}

/// The smallest useful document: a name, one contact field and a summary.
pub fn minimal_resume() -> Resume {
    Resume {
        name: "Ada Hargrove".into(),
        contact: Contact {
            email: Some("ada@hargrove.dev".into()),
            ..Contact::default()
        },
        summary: "Systems engineer focused on storage and reliability.".into(),
        ..Resume::default()
    }
}

/// A resume with `entries` experience entries of four wrapped bullets
/// each, long enough to spill over several pages.
pub fn long_resume(entries: usize) -> Resume {
    let experience = (0..entries)
        .map(|i| ExperienceEntry {
            role: "Platform Engineer".into(),
            company: format!("Fjordworks {}", i + 1),
            location: "Oslo, Norway".into(),
            date: format!("20{:02} - 20{:02}", 10 + i, 11 + i),
            points: vec![
                BulletPoint::new(
                    "Designed and shipped a streaming ingestion service that sustained \
                     forty thousand events per second with subsecond end to end latency",
                ),
                BulletPoint::new(
                    "Rebuilt the deployment pipeline so a full rollout finishes in \
                     **eleven minutes** instead of two hours",
                ),
                BulletPoint::new("Mentored four engineers through their first production launches"),
                BulletPoint::new(
                    "Standardized the team's observability stack and cut alert noise by **60%**",
                ),
            ],
        })
        .collect();

    Resume {
        name: "Ada Hargrove".into(),
        contact: Contact {
            email: Some("ada@hargrove.dev".into()),
            location: Some("Oslo, Norway".into()),
            ..Contact::default()
        },
        summary: "Platform engineer who keeps large ingestion fleets healthy.".into(),
        experience,
        ..Resume::default()
    }
}
