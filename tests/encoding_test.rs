use encoding_rs::GBK;
use judge_scrape::encoding::{detect_encoding, transcode_to_utf8};
use judge_scrape::{scrape_bytes, scrape_bytes_with_options, Options, Sample};

const LUOGU_URL: &str = "https://www.luogu.com.cn/problem/P1001";

fn luogu_page(charset: &str) -> String {
    format!(
        r#"<html><head><meta charset="{charset}"></head><body>
<div class="problem-card">
  <h1>P1001 两数之和</h1>
  <h2>题目描述</h2><p>输入两个整数，输出它们的和。</p>
  <h2>输入输出样例</h2><div><pre>1 2</pre></div><div><pre>3</pre></div>
</div></body></html>"#
    )
}

#[test]
fn utf8_page_is_read_as_is() {
    let html = luogu_page("utf-8");
    let result = scrape_bytes(html.as_bytes(), LUOGU_URL).expect("supported url");
    let problem = result.problem().expect("statement found");

    assert_eq!(problem.title, "两数之和");
    assert!(problem.content.starts_with("输入两个整数，输出它们的和。"));
}

#[test]
fn gbk_page_is_transcoded() {
    let page = luogu_page("gbk");
    let (bytes, _, _) = GBK.encode(&page);
    let result = scrape_bytes(&bytes, LUOGU_URL).expect("supported url");
    let problem = result.problem().expect("statement found");

    assert_eq!(problem.title, "两数之和");
    assert_eq!(result.samples(), &[Sample::new(1, "1 2", "3")]);
}

#[test]
fn gb2312_label_maps_to_gbk() {
    let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=GB2312">"#;
    assert_eq!(detect_encoding(html), GBK);
}

#[test]
fn undeclared_bytes_default_to_utf8() {
    let html = "<p>中文 café</p>";
    assert_eq!(transcode_to_utf8(html.as_bytes()), html);
}

#[test]
fn invalid_bytes_do_not_fail_extraction() {
    let mut html = luogu_page("utf-8").into_bytes();
    html.extend_from_slice(b"\xFF\xFE\xFD");
    let options = Options {
        status: "solved".to_string(),
        ..Options::default()
    };

    let result = scrape_bytes_with_options(&html, LUOGU_URL, &options).expect("supported url");
    assert_eq!(result.problem().map(|p| p.status.as_str()), Some("solved"));
}
