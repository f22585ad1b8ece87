//! Fixed content tables.
//!
//! Everything here is `'static` data; selection logic lives in the
//! `draftsmith` crate.

/// A named group of topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub topics: &'static [&'static str],
}

/// Tone the model is asked to write in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voice {
    pub name: &'static str,
    pub instruction: &'static str,
}

pub const TOPIC_BANK: &[Category] = &[
    Category {
        name: "AWS/Cloud",
        topics: &[
            "IAM policies that look right but still fail",
            "VPC route tables: the one line that breaks everything",
            "Security Groups vs NACLs: what actually blocks traffic",
            "S3 lifecycle rules that actually save money",
            "RDS connection limits and why apps crash",
            "CloudFront cache invalidation gotchas",
            "ALB health checks: why instances look healthy but aren't",
            "ECS task networking pitfalls (awsvpc vs bridge)",
            "Lambda timeouts and hidden cold start causes",
            "CloudWatch alarms that saved me from silent failures",
        ],
    },
    Category {
        name: "Microservices/Backend",
        topics: &[
            "Why I split one service into three (and when not to)",
            "API gateway rate limits that broke my mobile app",
            "Idempotency keys: small detail, huge impact",
            "Retries vs timeouts: the failure mode nobody expects",
            "Schema migration strategy that didn't break production",
            "Message queues: when async actually makes things worse",
        ],
    },
    Category {
        name: "DevOps/Infra",
        topics: &[
            "CI caching: the 1-line change that cut build time",
            "Secrets in CI: safer than env vars (if you do this)",
            "Docker build layers: why your image is huge",
            "Health checks: what to probe and what NOT to",
            "Blue/green deploys: the simple way without fancy tools",
        ],
    },
    Category {
        name: "Tools & Tips",
        topics: &[
            "3 AWS CLI flags I use every day",
            "My default CloudWatch dashboard setup",
            "Naming conventions that keep infra sane",
            "The one logging mistake that hides real errors",
            "How I document architecture so future me survives",
        ],
    },
];

pub const VOICES: &[Voice] = &[
    Voice {
        name: "The Analyst",
        instruction: "Calm and structured. Focus on clarity and trade-offs.",
    },
    Voice {
        name: "The Builder",
        instruction: "Hands-on and practical. Focus on what worked in real setups.",
    },
    Voice {
        name: "The Skeptic",
        instruction: "Question common advice. Use a respectful contrarian angle.",
    },
    Voice {
        name: "The Debugger",
        instruction: "Focused on fixing real issues. Explain the root cause.",
    },
];

pub const STRUCTURES: &[&str] = &[
    "Story: Hook -> Context -> Insight -> Example -> Tip",
    "List: Hook -> 3 bullets -> Practical tip",
    "Comparison: A vs B -> When to use -> Tip",
    "Myth-bust: Common belief -> Reality -> Example -> Tip",
    "Problem/Solution: Problem -> Fix -> Why it works -> Tip",
];

/// Badge colors per category, hex without `#`.
pub const BADGE_COLORS: &[(&str, &str)] = &[
    ("AWS/Cloud", "232F3E"),
    ("Microservices/Backend", "4B7BEC"),
    ("DevOps/Infra", "20BF6B"),
    ("Tools & Tips", "F39C12"),
];

pub const FALLBACK_BADGE_COLOR: &str = "4B7BEC";

/// Ordered topics of the daily series. Day `n` is `SERIES_TOPICS[n - 1]`.
pub const SERIES_TOPICS: &[&str] = &[
    "IAM users, roles and policies: who can do what",
    "EC2 instance types without the guesswork",
    "S3 storage classes and when each one pays off",
    "VPC basics: subnets, route tables and gateways",
    "Security Groups: stateful firewalls done right",
    "Elastic Load Balancing: ALB vs NLB",
    "Auto Scaling groups and the warm-up trap",
    "RDS Multi-AZ vs read replicas",
    "DynamoDB partition keys that don't hot-spot",
    "Lambda: what cold starts really cost",
    "API Gateway: REST vs HTTP APIs",
    "CloudFront in front of S3, done properly",
    "Route 53 routing policies in practice",
    "CloudWatch metrics, logs and alarms",
    "SQS standard vs FIFO queues",
    "SNS fan-out patterns",
    "EventBridge rules instead of cron servers",
    "ECS on Fargate: task definitions demystified",
    "EKS: when Kubernetes on AWS is worth it",
    "ECR image scanning and lifecycle policies",
    "Secrets Manager vs Parameter Store",
    "KMS keys and envelope encryption",
    "CloudFormation stacks and drift",
    "CodePipeline for a minimal CI/CD flow",
    "Systems Manager Session Manager instead of SSH",
    "Tagging strategy that makes billing readable",
    "The Well-Architected Framework in one page",
    "Cost Explorer habits that catch surprises early",
    "Designing for failure across Availability Zones",
    "What 30 days of AWS taught me",
];

/// Service shown on the badge for day `n`, looked up at `n - 1`. Days past
/// the end of this table use [`FALLBACK_SERVICE_LABEL`].
pub const SERIES_SERVICES: &[&str] = &[
    "IAM",
    "EC2",
    "S3",
    "VPC",
    "Security Groups",
    "ELB",
    "Auto Scaling",
    "RDS",
    "DynamoDB",
    "Lambda",
    "API Gateway",
    "CloudFront",
    "Route 53",
    "CloudWatch",
    "SQS",
    "SNS",
    "EventBridge",
    "ECS",
    "EKS",
    "ECR",
    "Secrets Manager",
    "KMS",
    "CloudFormation",
    "CodePipeline",
    "Systems Manager",
];

pub const FALLBACK_SERVICE_LABEL: &str = "AWS";

pub const SERIES_BADGE_COLOR: &str = "FF9900";

pub const BLOG_HASHTAGS: &str = "#AWS #CloudComputing #DevOps #LearningInPublic";

pub const SERIES_HASHTAGS: &str = "#AWS #30DaysOfAWS #CloudComputing #LearningInPublic";

pub const DEEP_DIVE_HASHTAGS: &str = "#SystemDesign #Backend #DevOps #DeepDive";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_topics_and_a_color() {
        for category in TOPIC_BANK {
            assert!(!category.topics.is_empty(), "{} is empty", category.name);
            assert!(
                BADGE_COLORS.iter().any(|(name, _)| *name == category.name),
                "{} has no badge color",
                category.name
            );
        }
    }

    #[test]
    fn service_table_never_outgrows_the_series() {
        assert!(SERIES_SERVICES.len() <= SERIES_TOPICS.len());
    }

    #[test]
    fn style_tables_are_populated() {
        assert!(!VOICES.is_empty());
        assert!(!STRUCTURES.is_empty());
    }
}
