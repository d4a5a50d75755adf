//! Demo command: project a sample DaemonSet manifest

use anyhow::Result;
use pluck::Value;
use serde_json::json;

use super::project::run;

/// A DaemonSet manifest with more detail than most readers want.
pub fn sample_document() -> Value {
    Value::from(json!({
        "apiVersion": "extensions/v1beta1",
        "kind": "DaemonSet",
        "metadata": {
            "name": "busy-dm",
            "namespace": "default",
            "labels": {
                "app": "busy-dm"
            }
        },
        "spec": {
            "template": {
                "metadata": {
                    "labels": {
                        "name": "busy-dm"
                    }
                },
                "spec": {
                    "nodeSelector": {
                        "kubernetes.io/hostname": "ip-172-20-53-35.ec2.internal"
                    },
                    "containers": [
                        {
                            "image": "busybox",
                            "command": ["sleep", "3600"],
                            "imagePullPolicy": "IfNotPresent",
                            "name": "busybox"
                        },
                        {
                            "image": "nginx",
                            "command": ["sleep", "3600"],
                            "imagePullPolicy": "IfNotPresent",
                            "name": "nginx"
                        }
                    ]
                }
            }
        }
    }))
}

/// Keeps identity, metadata, and the name and image of each container.
/// `labels.app2` does not exist, so `labels` comes out empty.
pub fn sample_template() -> Value {
    Value::from(json!({
        "apiVersion": null,
        "kind": null,
        "metadata": {
            "name": null,
            "namespace": null,
            "labels": {
                "app2": null
            }
        },
        "spec": {
            "template": {
                "spec": {
                    "containers": {
                        "name": null,
                        "image": null
                    }
                }
            }
        }
    }))
}

pub fn execute(compact: bool) -> Result<String> {
    run(&sample_document(), &sample_template(), compact)
}
