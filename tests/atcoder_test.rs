use judge_scrape::{scrape_html, Sample};

const URL: &str = "https://atcoder.jp/contests/abc301/tasks/abc301_b";

const BILINGUAL: &str = r#"
<html><head><title>B - Fill the Gaps</title></head><body>
<div id="main-container">
  <span class="h2">B - Fill the Gaps <a class="btn btn-default">Editorial</a></span>
  <p>実行時間制限: 2 sec / メモリ制限: 1024 MB</p>
  <div id="task-statement">
    <span class="lang">
      <span class="lang-ja" style="display:none">
        <p>配点 : <var>200</var> 点</p>
        <div class="part"><section><h3>問題文</h3><p>隣接する項の差を埋めます。</p></section></div>
        <div class="part"><section><h3>入力例 1</h3><pre>JA_ONLY</pre></section></div>
        <div class="part"><section><h3>出力例 1</h3><pre>JA_ONLY</pre></section></div>
      </span>
      <span class="lang-en">
        <p>Score : <var>200</var> points</p>
        <div class="part"><section><h3>Problem Statement</h3><p>Fill the gaps between adjacent terms.</p></section></div>
        <div class="part"><section><h3>Constraints</h3><ul><li>2 \leq N \leq 100</li></ul></section></div>
        <div class="io-style">
          <div class="part"><section><h3>Input</h3><p>N followed by the sequence.</p></section></div>
          <div class="part"><section><h3>Output</h3><p>Print the filled sequence.</p></section></div>
        </div>
        <div class="part"><section><h3>Sample Input 1<span class="btn-copy">Copy</span></h3><pre>4
2 5 1 2</pre></section></div>
        <div class="part"><section><h3>Sample Output 1<span class="btn-copy">Copy</span></h3><pre>2 3 4 5 4 3 2 1 2</pre></section></div>
      </span>
    </span>
  </div>
</div>
</body></html>"#;

#[test]
fn bilingual_page_reads_only_visible_english() {
    let result = scrape_html(BILINGUAL, URL).expect("supported url");
    let problem = result.problem().expect("statement found");

    assert_eq!(problem.id, "abc301_b");
    assert_eq!(problem.title, "B - Fill the Gaps");
    assert!(problem.content.starts_with("Fill the gaps between adjacent terms."));
    assert!(!problem.content.contains("隣接"));
    assert!(!problem.content.contains("JA_ONLY"));
    assert_eq!(problem.input_format, "N followed by the sequence.");
    assert_eq!(problem.output_format, "Print the filled sequence.");
    assert_eq!(
        result.samples(),
        &[Sample::new(1, "4\n2 5 1 2", "2 3 4 5 4 3 2 1 2")]
    );
}

#[test]
fn constraints_combine_limits_score_and_section() {
    let result = scrape_html(BILINGUAL, URL).expect("supported url");
    let constraints = &result.problem().expect("statement found").constraints;

    let lines: Vec<&str> = constraints.lines().collect();
    assert_eq!(lines[0], "time limit: 2 sec");
    assert_eq!(lines[1], "memory limit: 1024 MB");
    assert_eq!(lines[2], "Score : 200 points");
    assert!(constraints.ends_with("2 \\leq N \\leq 100"));
}

#[test]
fn japanese_only_page_uses_japanese_headings() {
    let html = r#"
<div id="task-statement"><span class="lang"><span class="lang-ja">
  <div class="part"><section><h3>問題文</h3><p>整数を出力せよ。</p></section></div>
  <div class="part"><section><h3>入力</h3><p>N</p></section></div>
  <div class="part"><section><h3>入力例 1</h3><pre>5</pre></section></div>
  <div class="part"><section><h3>出力例 1</h3><pre>25</pre></section></div>
</span></span></div>"#;

    let result = scrape_html(html, URL).expect("supported url");
    let problem = result.problem().expect("statement found");

    assert!(problem.content.starts_with("整数を出力せよ。"));
    assert_eq!(problem.input_format, "N");
    assert_eq!(result.samples(), &[Sample::new(1, "5", "25")]);
}
