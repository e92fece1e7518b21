use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

pub fn build_id() -> String {
    let uuid = Uuid::new_v4().simple();
    format!("{}", uuid)
}

///
/// 清洗上传文件名：去掉非 ASCII 字符，路径分隔符视为空白，
/// 空白段用 `_` 连接，只保留 `[A-Za-z0-9_.-]`，再去掉首尾的 `.` 和 `_`
pub fn secure_filename(name: &str) -> String {
    lazy_static! {
        static ref UNSAFE_RE: Regex = Regex::new(r"[^A-Za-z0-9_.-]").expect("filename pattern");
    }
    let ascii: String = name
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = ascii.split_ascii_whitespace().collect::<Vec<_>>().join("_");
    UNSAFE_RE.replace_all(&joined, "").trim_matches(|c| c == '.' || c == '_').to_string()
}

/// 在扩展名前插入后缀：`photo.jpg` -> `photo_<suffix>.jpg`
pub fn append_stem_suffix(file_name: &str, suffix: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => format!("{}_{}{}", &file_name[..dot], suffix, &file_name[dot..]),
        _ => format!("{}_{}", file_name, suffix),
    }
}
