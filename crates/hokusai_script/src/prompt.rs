//! Plot-writer instruction composition.
//!
//! Deterministic formatting only: same inputs always produce byte-identical
//! instruction text. The English and Japanese variants share the same
//! structure (persona, strict rules, output format, theme, content
//! instruction); the Japanese variant additionally states the right-to-left
//! panel reading order.

use hokusai_core::{Language, NO_PREFERENCE};

/// Compose the instruction text for the plot-writer call.
///
/// When `extra_content` is the `"up to you"` sentinel (case- and
/// whitespace-insensitive) the instructions grant full creative freedom;
/// otherwise they require the element to be incorporated verbatim. One
/// output-format stanza is emitted per page from 1 to `page_count`, with
/// the page-1 stanza additionally requiring a title line.
///
/// # Examples
///
/// ```
/// use hokusai_core::Language;
/// use hokusai_script::plot_writer_instructions;
///
/// let text = plot_writer_instructions("Horror", "up to you", 3, Language::English);
/// assert!(text.contains("[Page 3]"));
/// assert!(text.contains("complete creative freedom"));
/// ```
pub fn plot_writer_instructions(
    theme: &str,
    extra_content: &str,
    page_count: u32,
    language: Language,
) -> String {
    match language {
        Language::English => english_instructions(theme, extra_content, page_count),
        Language::Japanese => japanese_instructions(theme, extra_content, page_count),
    }
}

fn is_no_preference(extra_content: &str) -> bool {
    extra_content.trim().eq_ignore_ascii_case(NO_PREFERENCE)
}

/// One `[Page N]` stanza per page; the page-1 stanza carries the title line.
fn output_format(page_count: u32, title_line: &str, panel_line: &str) -> String {
    let mut lines = Vec::new();
    for i in 1..=page_count {
        lines.push(format!("[Page {}] (X panels)", i));
        if i == 1 {
            lines.push(title_line.to_string());
        }
        lines.push(panel_line.to_string());
        lines.push(String::new());
    }
    lines.join("\n")
}

fn english_instructions(theme: &str, extra_content: &str, page_count: u32) -> String {
    let content_instruction = if is_no_preference(extra_content) {
        "You have complete creative freedom for the story details.".to_string()
    } else {
        format!(
            "Important: Please incorporate this element into the story: {}",
            extra_content
        )
    };

    let output_format = output_format(
        page_count,
        "Title: (A killer, unforgettable title)",
        "→ Panel-by-panel description + dialogue + sound effects/narration as needed",
    );

    format!(
        "
You are a legendary Japanese manga editor and story writer who has worked at Weekly Shonen Jump, Young Jump, Morning, and Champion.
You are the mastermind behind multiple mega-hits on the level of ONE PIECE, Attack on Titan, Kaguya-sama: Love is War, Chainsaw Man, and Frieren: Beyond Journey's End.
Right now, I'm commissioning you to create a complete {page_count}-page one-shot manga plot that absolutely blows the reader's mind.

【Strict Rules】
- Must perfectly conclude in exactly {page_count} pages (Page 1 → Page {page_count})
- You decide the number of panels per page freely to achieve the absolute best pacing and impact (usually 3–8 panels per page)
- It has to be so insanely good that the reader screams \"HOLY SHIT!!!\" even though it's only {page_count} pages
- Page {page_count} must deliver an explosive emotional payoff: catharsis, a mind-blowing twist, uncontrollable laughter, tears, spine-chilling horror, heart-melting romance—something that hits like a truck
- Include at least one element that makes people immediately want to re-read the whole thing
- Dialogue must feel 100% professional—natural, catchy, and memorable
- Even with minimal characters, give every single one an unforgettable personality
- ALL DIALOGUE, NARRATION, AND TEXT MUST BE IN ENGLISH

You must follow this exact format:
【Output Format】
{output_format}

The theme is: {theme}
{content_instruction}

Blow my mind in {page_count} pages with this theme. Go all out.
"
    )
}

fn japanese_instructions(theme: &str, extra_content: &str, page_count: u32) -> String {
    let content_instruction = if is_no_preference(extra_content) {
        "ストーリーの詳細は完全にあなたの創作の自由です。".to_string()
    } else {
        format!("重要: この要素をストーリーに取り入れてください: {}", extra_content)
    };

    let output_format = output_format(
        page_count,
        "タイトル: (キャッチーで忘れられないタイトル)",
        "→ コマごとの描写 + セリフ + 必要に応じて効果音/ナレーション",
    );

    format!(
        "
あなたは週刊少年ジャンプ、ヤングジャンプ、モーニング、チャンピオンで活躍してきた伝説的な漫画編集者・ストーリー作家です。
ONE PIECE、進撃の巨人、かぐや様は告らせたい、チェンソーマン、葬送のフリーレンレベルのメガヒット作を何本も手がけた名手です。
今、{page_count}ページの読み切り漫画のプロットを作成してください。読者の心を完全に掴む作品をお願いします。

【厳守事項】
- 必ず{page_count}ページで完璧に完結させること(1ページ目 → {page_count}ページ目)
- 各ページのコマ数は最高の演出とテンポを実現するため自由に決定してください(通常1ページあたり3〜8コマ)
- 日本の漫画は基本的に右から左へ読み進めるため、横にコマを並べる際は右から左に物語を進めること
- たった{page_count}ページでも読者が「すげええええ!!!」と叫ぶほどの圧倒的な面白さを実現すること
- {page_count}ページ目では爆発的な感情のカタルシスを届けること: カタルシス、衝撃的などんでん返し、爆笑、涙、背筋も凍る恐怖、胸キュンロマンスなど、心に突き刺さる何かを
- 読み終わった後すぐにもう一度読み返したくなる要素を少なくとも1つ入れること
- セリフは100%プロフェッショナルな水準で: 自然で、キャッチーで、印象に残るものにすること
- 登場人物が少なくても、全員に忘れられない個性を持たせること
- 全てのセリフ、ナレーション、テキストは必ず日本語で書くこと

必ず以下のフォーマットに従ってください:
【出力フォーマット】
{output_format}

テーマは: {theme}
{content_instruction}

{page_count}ページでこのテーマを最高に面白く描いてください。全力で行け。
"
    )
}
