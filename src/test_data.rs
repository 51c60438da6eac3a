#[cfg(test)]
pub const POST_DATA: &str = "---
title: Getting started with ArgoCD
description: Deploying to Kubernetes the GitOps way, one Application at a time.
publishDate: 2024-02-12
tags:
  - kubernetes
  - argocd
  - gitops
---

ArgoCD watches a git repository and keeps the cluster in sync with it.

## Installing

```yaml
apiVersion: argoproj.io/v1alpha1
kind: Application
metadata:
  name: guestbook
```
";

#[cfg(test)]
pub const POST_DATA_TOML: &str = r#"+++
title = "Terraform state, explained"
description = "Where Terraform keeps what it knows, and why you should care."
publishDate = 2023-11-03T09:30:00Z
tags = ["terraform", "iac"]
draft = true
+++

Terraform state maps real resources to your configuration.
"#;

#[cfg(test)]
pub const POST_DATA_INVALID: &str = "---
title: TypeScript generics
publishDate: someday
tags: typescript
---

Generics let a function work over many types.
";
