use serde_json::json;

/// Build the bucket policy that allows anyone to read objects in the bucket
///
/// The document grants `s3:GetObject` on every object under the bucket to
/// the `*` principal, which is what makes the hosted site reachable from
/// the internet.
pub fn public_read_policy(bucket_name: &str) -> String {
    json!({
        "Version": "2012-10-17",
        "Statement": [{
            "Effect": "Allow",
            "Principal": "*",
            "Action": ["s3:GetObject"],
            "Resource": format!("arn:aws:s3:::{}/*", bucket_name)
        }]
    })
    .to_string()
}

/// Format the public URL of the hosted website
pub fn website_url(bucket_name: &str, region: &str) -> String {
    format!("http://{bucket_name}.s3-website.{region}.amazonaws.com")
}
