use crate::models::ThemeColor;

/// Builds the Skyline stylesheet, including the A4 print overrides.
///
/// Theme values are `CssValue`s and are interpolated as-is.
pub(crate) fn skyline_css(theme: &ThemeColor) -> String {
    let base = theme.base.as_str();
    let gradient = theme.gradient.as_str();

    format!(
        r#"
    * {{
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }}
    body {{
      font-family: 'Segoe UI', sans-serif;
      background: #9E9E9E;
      color: #333;
    }}
    .resume {{
      display: flex;
      width: 210mm;
      min-height: 297mm;
      margin: 0 auto;
      background: white;
      page-break-after: auto;
    }}
    .sidebar {{
      width: 35%;
      background: #1c2b39;
      color: white;
      padding: 30px 20px;
      display: flex;
      flex-direction: column;
      align-items: center;
      min-height: 100%;
    }}
    .sidebar img {{
      width: 120px;
      height: 120px;
      border-radius: 50%;
      object-fit: cover;
      margin-bottom: 20px;
    }}
    .sidebar h2 {{
      font-size: 18px;
      margin-top: 10px;
      color: white;
      text-align: center;
    }}
    .sidebar .section {{
      width: 100%;
      margin-top: 30px;
    }}
    .sidebar .section h3 {{
      background-image: {gradient};
      padding: 8px 10px;
      font-size: 14px;
    }}
    .sidebar ul {{
      list-style: none;
      padding: 10px 15px;
      font-size: 14px;
    }}
    .sidebar ul li {{
      margin-bottom: 8px;
      overflow-wrap: anywhere;
    }}
    .main {{
      width: 65%;
      display: flex;
      flex-direction: column;
    }}
    .main-header {{
      background: #eeeeee;
      padding: 40px;
    }}
    .main-header h1 {{
      font-size: 26px;
      font-weight: 600;
    }}
    .main-header h1 span {{
      color: {base};
    }}
    .main-header p {{
      font-size: 14px;
      margin-top: 10px;
    }}
    .main-body {{
      padding: 30px 40px;
      flex-grow: 1;
    }}
    .main-section {{
      margin-top: 30px;
      page-break-inside: avoid;
    }}
    .main-section h3 {{
      background-image: {gradient};
      color: white;
      font-size: 14px;
      padding: 8px 10px;
      margin-bottom: 20px;
    }}
    .timeline {{
      border-left: 2px solid {base};
      padding-left: 20px;
      position: relative;
    }}
    .timeline::before {{
      content: "";
      position: absolute;
      left: -2px;
      top: 0;
      bottom: 0;
      border-left: 2px dotted {base};
    }}
    .timeline-entry {{
      position: relative;
      margin-bottom: 30px;
      page-break-inside: avoid;
      break-inside: avoid;
    }}
    .timeline-entry::before {{
      content: "";
      position: absolute;
      left: -27px;
      top: 0px;
      width: 12px;
      height: 12px;
      background-image: {gradient};
      border-radius: 50%;
    }}
    .timeline-entry h4 {{
      font-size: 14px;
      font-weight: bold;
    }}
    .timeline-entry span {{
      font-size: 13px;
      color: #777;
    }}
    .timeline-entry p {{
      font-size: 13px;
      margin-top: 8px;
      line-height: 1.5;
      white-space: pre-line;
    }}

    @page {{
      size: A4;
      margin: 0;
    }}

    @media print {{
      body {{
        -webkit-print-color-adjust: exact;
        print-color-adjust: exact;
      }}
      .resume {{
        width: 210mm;
        min-height: 297mm;
        box-shadow: none;
        margin: 0;
        page-break-after: always;
        display: flex;
      }}
      .main-section h3,
      .sidebar .section h3 {{
        background-image: {gradient} !important;
        color: white !important;
      }}
      .sidebar,
      .main {{
        page-break-inside: avoid;
      }}
      .main-header {{
        background: #eeeeee !important;
      }}
    }}
  "#
    )
}
